use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use http::header::{ACCEPT_ENCODING, CACHE_CONTROL, CONTENT_TYPE, HeaderValue, USER_AGENT};
use http::{Request, StatusCode, Uri};
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use rustls::{ClientConfig, RootCertStore};
use thiserror::Error;

use crate::tls::{TlsConfig, TlsError};

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build TLS connector: {0}")]
    BuildTlsConnector(#[from] TlsError),
    #[error("Failed to make HTTP(S) request: {0}")]
    CallRequest(#[from] hyper_util::client::legacy::Error),
    #[error("Failed to read response: {0}")]
    ReadIncoming(#[from] hyper::Error),
    #[error("Failed to build HTTP request: {0}")]
    BuildRequest(#[from] http::Error),
    #[error("unexpected status code {0}")]
    UnexpectedStatus(StatusCode),
    #[error("no response within {0:?}")]
    Timeout(Duration),
}

/// Posts XML-RPC documents to a single endpoint.
///
/// Cloning is cheap, clones share the connection pool.
#[derive(Clone)]
pub(crate) struct HttpClient {
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    user_agent: HeaderValue,
    timeout: Duration,
}

impl HttpClient {
    /// The TLS settings only matter for `https` endpoints, plain `http`
    /// never touches the system roots.
    pub fn new(
        secure: bool,
        tls: Option<&TlsConfig>,
        user_agent: HeaderValue,
        timeout: Duration,
    ) -> Result<HttpClient, HttpError> {
        let config = if secure {
            match tls {
                Some(tls) => tls.client_config()?,
                None => TlsConfig::default().client_config()?,
            }
        } else {
            ClientConfig::builder()
                .with_root_certificates(RootCertStore::empty())
                .with_no_client_auth()
        };

        let mut http = HttpConnector::new();
        http.enforce_http(false);
        let https = HttpsConnector::from((http, config));
        let client = Client::builder(TokioExecutor::new()).build(https);

        Ok(HttpClient {
            client,
            user_agent,
            timeout,
        })
    }

    fn request(&self, uri: &Uri, body: Vec<u8>) -> Result<Request<Full<Bytes>>, HttpError> {
        let req = Request::post(uri.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("text/xml"))
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .header(ACCEPT_ENCODING, HeaderValue::from_static("identity"))
            .header(USER_AGENT, self.user_agent.clone())
            .body(Full::new(Bytes::from(body)))?;

        Ok(req)
    }

    pub async fn post(&self, uri: &Uri, body: Vec<u8>) -> Result<Bytes, HttpError> {
        let req = self.request(uri, body)?;

        let fut = async {
            let resp = self.client.request(req).await?;

            debug!(
                message = "HTTP response received",
                status = %resp.status(),
                version = ?resp.version(),
                content_length = ?resp.body().size_hint().exact(),
            );

            let status = resp.status();
            if status.is_client_error() || status.is_server_error() {
                return Err(HttpError::UnexpectedStatus(status));
            }

            let body = resp.into_body().collect().await?.to_bytes();

            Ok(body)
        };

        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_elapsed) => Err(HttpError::Timeout(self.timeout)),
        }
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_headers() {
        let client = HttpClient::new(
            false,
            None,
            HeaderValue::from_static("xenapi/test"),
            Duration::from_secs(1),
        )
        .unwrap();
        let uri = Uri::from_static("http://xen.example.com/");

        let req = client.request(&uri, b"<methodCall/>".to_vec()).unwrap();

        assert_eq!(req.method(), http::Method::POST);
        assert_eq!(req.uri(), &uri);
        assert_eq!(req.headers()[CONTENT_TYPE], "text/xml");
        assert_eq!(req.headers()[CACHE_CONTROL], "no-cache");
        assert_eq!(req.headers()[ACCEPT_ENCODING], "identity");
        assert_eq!(req.headers()[USER_AGENT], "xenapi/test");
        assert_eq!(req.body().size_hint().exact(), Some(13));
    }
}
