use std::fmt;
use std::sync::Arc;

use http::Uri;
use http::header::HeaderValue;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::Instrument;
use xmlrpc::{MethodResponse, Value};

use crate::api::SessionRef;
use crate::http::HttpClient;
use crate::marshal::{FromValue, ToValue};
use crate::{ApiVersion, ClientConfig, Error, RpcError, TransportError, api};

#[derive(Clone, Copy, Debug, PartialEq)]
enum LoginKind {
    Password,
    SlaveLocal,
}

struct Credentials {
    user: String,
    password: String,
    kind: LoginKind,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"**REDACTED**")
            .field("kind", &self.kind)
            .finish()
    }
}

#[derive(Debug, Default)]
struct Versions {
    api: ApiVersion,
    xapi: Option<String>,
}

struct Inner {
    endpoint: Uri,
    client: HttpClient,
    config: ClientConfig,

    reference: RwLock<Option<SessionRef>>,
    // held for the whole login, logout or relogin
    credentials: Mutex<Option<Credentials>>,
    versions: RwLock<Versions>,
}

/// An authenticated connection to a XenAPI server.
///
/// Cloning is cheap, every clone shares the HTTP connection pool and the
/// session reference, so one login serves any number of tasks.
#[derive(Clone)]
pub struct Session {
    inner: Arc<Inner>,
}

impl Session {
    /// Prepares a session for `config.endpoint`, nothing is sent until one
    /// of the login methods is called.
    pub fn new(config: ClientConfig) -> Result<Session, Error> {
        let secure = match config.endpoint.scheme() {
            "http" => false,
            "https" => true,
            other => {
                return Err(Error::argument(
                    "ClientConfig.endpoint",
                    format!("unsupported scheme {other:?}"),
                ));
            }
        };

        let endpoint = config
            .endpoint
            .as_str()
            .parse::<Uri>()
            .map_err(|err| Error::argument("ClientConfig.endpoint", err))?;
        let user_agent = HeaderValue::from_str(&config.user_agent())
            .map_err(|err| Error::argument("ClientConfig.user_agent", err))?;
        let client = HttpClient::new(secure, config.tls.as_ref(), user_agent, config.timeout)
            .map_err(|err| Error::argument("ClientConfig.tls", err))?;

        Ok(Session {
            inner: Arc::new(Inner {
                endpoint,
                client,
                config,
                reference: RwLock::new(None),
                credentials: Mutex::new(None),
                versions: RwLock::new(Versions::default()),
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The current session reference, `None` before login and after logout.
    pub fn reference(&self) -> Option<SessionRef> {
        self.inner.reference.read().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.reference.read().is_some()
    }

    /// `ApiVersion::Unknown` until [`Session::discover_versions`] ran.
    pub fn api_version(&self) -> ApiVersion {
        self.inner.versions.read().api
    }

    /// The `xapi` entry of the coordinator's software version, once
    /// discovered.
    pub fn xapi_version(&self) -> Option<String> {
        self.inner.versions.read().xapi.clone()
    }

    /// Logs in with a user name and password, the credentials are kept for
    /// [`Session::relogin`].
    pub async fn login_with_password(&self, user: &str, password: &str) -> Result<(), Error> {
        self.login(Credentials {
            user: user.to_string(),
            password: password.to_string(),
            kind: LoginKind::Password,
        })
        .await
    }

    /// Logs in to a pool member in emergency mode. The resulting session is
    /// only valid on that host.
    pub async fn login_slave_local(&self, user: &str, password: &str) -> Result<(), Error> {
        self.login(Credentials {
            user: user.to_string(),
            password: password.to_string(),
            kind: LoginKind::SlaveLocal,
        })
        .await
    }

    async fn login(&self, credentials: Credentials) -> Result<(), Error> {
        let mut stored = self.inner.credentials.lock().await;

        let reference = self.password_login(&credentials).await?;
        debug!(
            message = "Logged in",
            user = %credentials.user,
            kind = ?credentials.kind,
            originator = %self.inner.config.originator,
        );

        *self.inner.reference.write() = Some(reference);
        *stored = Some(credentials);
        drop(stored);

        self.after_login().await
    }

    async fn password_login(&self, credentials: &Credentials) -> Result<SessionRef, Error> {
        let config = &self.inner.config;
        let (method, args) = match credentials.kind {
            LoginKind::Password => (
                "session.login_with_password",
                vec![
                    credentials
                        .user
                        .to_value("session.login_with_password(uname)")?,
                    credentials
                        .password
                        .to_value("session.login_with_password(pwd)")?,
                    config
                        .client_version
                        .to_value("session.login_with_password(version)")?,
                    config
                        .originator
                        .to_value("session.login_with_password(originator)")?,
                ],
            ),
            LoginKind::SlaveLocal => (
                "session.slave_local_login_with_password",
                vec![
                    credentials
                        .user
                        .to_value("session.slave_local_login_with_password(uname)")?,
                    credentials
                        .password
                        .to_value("session.slave_local_login_with_password(pwd)")?,
                ],
            ),
        };

        let result = self.call(method, args).await?;
        SessionRef::from_value(&format!("{method} -> "), &result)
    }

    /// Adopts a session reference issued elsewhere, after checking with
    /// the server that it is still valid.
    pub async fn login_with_token(&self, token: impl Into<String>) -> Result<(), Error> {
        let mut stored = self.inner.credentials.lock().await;

        let reference = SessionRef::new(token);
        let args = vec![
            reference.to_value("session.get_uuid(session_id)")?,
            reference.to_value("session.get_uuid(self)")?,
        ];
        let result = self.call("session.get_uuid", args).await?;
        let uuid = String::from_value("session.get_uuid -> ", &result)?;
        debug!(message = "Adopted session", %uuid);

        *self.inner.reference.write() = Some(reference);
        *stored = None;
        drop(stored);

        self.after_login().await
    }

    async fn after_login(&self) -> Result<(), Error> {
        if self.inner.config.discover_versions {
            self.discover_versions().await?;
        }

        Ok(())
    }

    /// Repeats the last password login and swaps in the new reference,
    /// typically after a `SESSION_INVALID` fault.
    pub async fn relogin(&self) -> Result<(), Error> {
        let stored = self.inner.credentials.lock().await;
        let Some(credentials) = stored.as_ref() else {
            return Err(Error::argument(
                "session.relogin",
                "no credentials stored, log in with a password first",
            ));
        };

        let reference = self.password_login(credentials).await?;
        let previous = self.inner.reference.write().replace(reference);
        info!(
            message = "Session renewed",
            user = %credentials.user,
            previous = ?previous.as_ref().map(|r| r.as_str()),
        );

        Ok(())
    }

    /// Ends the session on the server. Calling it while logged out does
    /// nothing. The local state is cleared even when the server call fails.
    pub async fn logout(&self) -> Result<(), Error> {
        self.end("session.logout").await
    }

    /// Ends a session obtained with [`Session::login_slave_local`].
    pub async fn logout_local(&self) -> Result<(), Error> {
        self.end("session.local_logout").await
    }

    async fn end(&self, method: &str) -> Result<(), Error> {
        let mut stored = self.inner.credentials.lock().await;
        let Some(reference) = self.inner.reference.write().take() else {
            return Ok(());
        };
        stored.take();

        let arg = reference.to_value(&format!("{method}(session_id)"))?;
        self.call(method, vec![arg]).await?;
        debug!(message = "Logged out", session = %reference);

        Ok(())
    }

    /// Runs `f` and logs out afterwards, whatever `f` returned. An error
    /// from `f` wins over a logout error.
    pub async fn scope<T, F>(&self, f: F) -> Result<T, Error>
    where
        F: AsyncFnOnce(&Session) -> Result<T, Error>,
    {
        let result = f(self).await;
        let logout = self.logout().await;

        match (result, logout) {
            (Ok(value), Ok(())) => Ok(value),
            (Err(err), _) | (Ok(_), Err(err)) => Err(err),
        }
    }

    /// Looks up the API revision and xapi version of the pool coordinator.
    pub async fn discover_versions(&self) -> Result<ApiVersion, Error> {
        let pools = api::pool::get_all(self).await?;
        let Some(pool) = pools.first() else {
            return Err(Error::deserialize("pool.get_all -> ", "no pool found"));
        };

        let master = api::pool::get_master(self, pool).await?;
        let major = api::host::get_api_version_major(self, &master).await?;
        let minor = api::host::get_api_version_minor(self, &master).await?;
        let mut software = api::host::get_software_version(self, &master).await?;

        let api = ApiVersion::from_parts(major, minor);
        let xapi = software.remove("xapi");
        if api == ApiVersion::Unknown {
            warn!(message = "Unknown API version", major, minor);
        }
        info!(message = "Discovered server version", %api, xapi = ?xapi);

        *self.inner.versions.write() = Versions { api, xapi };

        Ok(api)
    }

    /// Calls `method` with the session reference prepended to `args`.
    pub async fn invoke(&self, method: &str, mut args: Vec<Value>) -> Result<Value, Error> {
        let context = format!("{method}(session_id)");
        let reference = self
            .reference()
            .ok_or_else(|| Error::argument(context.as_str(), "not logged in"))?;

        args.insert(0, reference.to_value(&context)?);
        self.call(method, args).await
    }

    /// Calls `method` with exactly `args`, for the methods that do not take
    /// a session.
    pub async fn call(&self, method: &str, args: Vec<Value>) -> Result<Value, Error> {
        let span = info_span!("xenapi", method = %method);

        self.dispatch(method, args).instrument(span).await
    }

    async fn dispatch(&self, method: &str, args: Vec<Value>) -> Result<Value, Error> {
        // argument values may hold passwords, never log them
        debug!(message = "Sending request", args = args.len());

        let body = xmlrpc::encode_call(method, &args)
            .map_err(|err| Error::transport(method, TransportError::Encode(err)))?;
        let bytes = self
            .inner
            .client
            .post(&self.inner.endpoint, body)
            .await
            .map_err(|err| Error::transport(method, err))?;

        match xmlrpc::decode_response(&bytes) {
            Ok(MethodResponse::Params(value)) => unwrap_status(method, value),
            Ok(MethodResponse::Fault(fault)) => {
                let err = RpcError::from_fault(method, &fault);
                debug!(message = "Server fault", code = %err.code, fault_code = fault.code);
                Err(err.into())
            }
            Err(err) => Err(Error::transport(method, TransportError::Decode(err))),
        }
    }
}

/// Strips the `{Status, Value}` envelope the server wraps results in.
/// Anything that does not look like one passes through unchanged.
fn unwrap_status(method: &str, value: Value) -> Result<Value, Error> {
    let mut members = match value {
        Value::Struct(members) => members,
        other => return Ok(other),
    };

    let status = members
        .get("Status")
        .and_then(Value::as_str)
        .map(str::to_owned);
    match status.as_deref() {
        Some("Success") if members.contains_key("Value") => {
            Ok(members.shift_remove("Value").unwrap_or(Value::Nil))
        }
        Some("Failure") if members.contains_key("ErrorDescription") => {
            let description = members.get("ErrorDescription").unwrap_or(&Value::Nil);
            let err = RpcError::from_description(method, description);
            debug!(message = "Server failure", code = %err.code);
            Err(err.into())
        }
        _ => Ok(Value::Struct(members)),
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("endpoint", &self.inner.endpoint)
            .field("logged_in", &self.is_logged_in())
            .field("api_version", &self.api_version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(members: &[(&str, Value)]) -> Value {
        members.iter().cloned().collect()
    }

    #[test]
    fn success_envelope() {
        let value = envelope(&[("Status", "Success".into()), ("Value", "OpaqueRef:a".into())]);
        assert_eq!(unwrap_status("m", value).unwrap(), Value::from("OpaqueRef:a"));
    }

    #[test]
    fn failure_envelope() {
        let value = envelope(&[
            ("Status", "Failure".into()),
            (
                "ErrorDescription",
                Value::Array(vec!["HOST_NAME_INVALID".into(), "bad name".into()]),
            ),
        ]);

        let err = unwrap_status("host.set_hostname_live", value).unwrap_err();
        assert!(err.is(crate::codes::HOST_NAME_INVALID));
        assert_eq!(err.params(), ["bad name"]);
    }

    #[test]
    fn other_structs_pass_through() {
        for value in [
            envelope(&[("Status", "Running".into()), ("Value", Value::Int(1))]),
            envelope(&[("Status", "Success".into())]),
            envelope(&[("uuid", "x".into())]),
            Value::Nil,
        ] {
            assert_eq!(unwrap_status("m", value.clone()).unwrap(), value);
        }
    }

    #[test]
    fn unsupported_scheme() {
        let config = ClientConfig::new("ftp://xen.example.com/".parse().unwrap());
        let err = Session::new(config).unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::Argument);
        assert_eq!(err.context(), "ClientConfig.endpoint");
    }

    #[test]
    fn credentials_are_redacted() {
        let credentials = Credentials {
            user: "root".to_string(),
            password: "hunter2".to_string(),
            kind: LoginKind::Password,
        };

        let text = format!("{credentials:?}");
        assert!(text.contains("root"));
        assert!(!text.contains("hunter2"));
    }
}
