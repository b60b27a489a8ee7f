//! A scripted XML-RPC server speaking the XenAPI conventions.
//!
//! Every method gets a canned `Reply`, or a sequence of them, and every
//! request the server sees is recorded so tests can assert on what the
//! client actually sent.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use xmlrpc::{Fault, MethodCall, Value};

/// What the server answers for a single call.
#[derive(Clone, Debug)]
pub enum Reply {
    /// A plain `<params>` response.
    Value(Value),
    /// `{Status: "Success", Value: ..}` the way xapi wraps results.
    Success(Value),
    /// `{Status: "Failure", ErrorDescription: [..]}`.
    Failure(Vec<String>),
    /// An XML-RPC `<fault>`.
    Fault(Fault),
    /// An empty body with the given status.
    Status(StatusCode),
    /// A raw body with status 200.
    Body(String),
    /// Sleeps before answering.
    Delayed(Duration, Box<Reply>),
}

impl Reply {
    pub fn value(value: impl Into<Value>) -> Self {
        Reply::Value(value.into())
    }

    pub fn success(value: impl Into<Value>) -> Self {
        Reply::Success(value.into())
    }

    pub fn failure(description: &[&str]) -> Self {
        Reply::Failure(description.iter().map(|s| s.to_string()).collect())
    }

    /// A fault whose `faultString` is the bracketed text `[CODE, p1, ...]`.
    pub fn fault(description: &[&str]) -> Self {
        Reply::Fault(Fault::new(1, format!("[{}]", description.join(", "))))
    }

    /// A list of references, `Value::Array` of strings.
    pub fn refs(refs: &[&str]) -> Self {
        Reply::Value(Value::Array(refs.iter().map(|r| Value::from(*r)).collect()))
    }

    pub fn nil() -> Self {
        Reply::Value(Value::Nil)
    }

    pub fn delayed(delay: Duration, reply: Reply) -> Self {
        Reply::Delayed(delay, Box::new(reply))
    }
}

/// A request received by the server.
#[derive(Clone, Debug)]
pub struct Call {
    pub method: String,
    pub params: Vec<Value>,
    pub headers: HeaderMap,
    pub uri: String,
}

impl Call {
    /// The first param as a string, the session reference for most calls.
    pub fn session(&self) -> Option<&str> {
        self.params.first().and_then(Value::as_str)
    }
}

type Responder = Box<dyn Fn(&Call) -> Reply + Send + Sync>;

enum Handler {
    Fixed(Reply),
    /// Replies in order, the last one repeats.
    Sequence { replies: Vec<Reply>, next: usize },
    Func(Responder),
}

impl Handler {
    fn reply(&mut self, call: &Call) -> Reply {
        match self {
            Handler::Fixed(reply) => reply.clone(),
            Handler::Sequence { replies, next } => {
                let index = (*next).min(replies.len().saturating_sub(1));
                *next += 1;
                replies.get(index).cloned().unwrap_or_else(Reply::nil)
            }
            Handler::Func(f) => f(call),
        }
    }
}

#[derive(Default)]
struct State {
    handlers: HashMap<String, Handler>,
    calls: Vec<Call>,
}

pub struct MockServer {
    addr: SocketAddr,
    state: Arc<Mutex<State>>,
    handle: JoinHandle<()>,
}

impl MockServer {
    /// Binds a loopback port and starts serving in the background.
    pub async fn start() -> MockServer {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        let state = Arc::new(Mutex::new(State::default()));

        let shared = Arc::clone(&state);
        let handle = tokio::spawn(async move {
            loop {
                let Ok((conn, _peer)) = listener.accept().await else {
                    break;
                };

                let state = Arc::clone(&shared);
                tokio::spawn(async move {
                    let service = service_fn(move |req| handle(Arc::clone(&state), req));
                    if let Err(err) = http1::Builder::new()
                        .serve_connection(TokioIo::new(conn), service)
                        .await
                    {
                        tracing::debug!(message = "mock connection closed", %err);
                    }
                });
            }
        });

        MockServer {
            addr,
            state,
            handle,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Answers `method` with `reply` until replaced.
    pub fn on(&self, method: &str, reply: Reply) -> &Self {
        self.state
            .lock()
            .handlers
            .insert(method.to_string(), Handler::Fixed(reply));
        self
    }

    /// Answers `method` with each reply in turn, repeating the last one.
    pub fn on_sequence(&self, method: &str, replies: impl IntoIterator<Item = Reply>) -> &Self {
        self.state.lock().handlers.insert(
            method.to_string(),
            Handler::Sequence {
                replies: replies.into_iter().collect(),
                next: 0,
            },
        );
        self
    }

    /// Computes the reply from the incoming call.
    pub fn on_fn<F>(&self, method: &str, f: F) -> &Self
    where
        F: Fn(&Call) -> Reply + Send + Sync + 'static,
    {
        self.state
            .lock()
            .handlers
            .insert(method.to_string(), Handler::Func(Box::new(f)));
        self
    }

    /// Every call received so far, in arrival order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<Call> {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|call| call.method == method)
            .cloned()
            .collect()
    }

    pub fn methods(&self) -> Vec<String> {
        self.state
            .lock()
            .calls
            .iter()
            .map(|call| call.method.clone())
            .collect()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(
    state: Arc<Mutex<State>>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) => return Ok(plain(StatusCode::BAD_REQUEST, err.to_string())),
    };

    let MethodCall { method, params } = match xmlrpc::decode_call(&body) {
        Ok(call) => call,
        Err(err) => return Ok(plain(StatusCode::BAD_REQUEST, err.to_string())),
    };

    let call = Call {
        method,
        params,
        headers: parts.headers,
        uri: parts.uri.to_string(),
    };

    let reply = {
        let mut state = state.lock();
        let reply = match state.handlers.get_mut(&call.method) {
            Some(handler) => handler.reply(&call),
            None => Reply::Fault(Fault::new(
                1,
                Value::Array(vec!["MESSAGE_METHOD_UNKNOWN".into(), call.method.clone().into()]),
            )),
        };
        state.calls.push(call);
        reply
    };

    Ok(respond(reply).await)
}

async fn respond(mut reply: Reply) -> Response<Full<Bytes>> {
    while let Reply::Delayed(delay, inner) = reply {
        tokio::time::sleep(delay).await;
        reply = *inner;
    }

    let encoded = match reply {
        Reply::Value(value) => xmlrpc::encode_response(&value),
        Reply::Success(value) => xmlrpc::encode_response(
            &[("Status", Value::from("Success")), ("Value", value)]
                .into_iter()
                .collect(),
        ),
        Reply::Failure(description) => xmlrpc::encode_response(
            &[
                ("Status", Value::from("Failure")),
                (
                    "ErrorDescription",
                    Value::Array(description.into_iter().map(Value::from).collect()),
                ),
            ]
            .into_iter()
            .collect(),
        ),
        Reply::Fault(fault) => xmlrpc::encode_fault(&fault),
        Reply::Status(status) => return plain(status, String::new()),
        Reply::Body(body) => return plain(StatusCode::OK, body),
        Reply::Delayed(..) => unreachable!("delays are unwrapped above"),
    };

    match encoded {
        Ok(body) => {
            let mut resp = Response::new(Full::new(Bytes::from(body)));
            resp.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("text/xml"));
            resp
        }
        Err(err) => plain(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

fn plain(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    let mut resp = Response::new(Full::new(Bytes::from(body)));
    *resp.status_mut() = status;
    resp
}
