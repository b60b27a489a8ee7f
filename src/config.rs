use std::path::Path;
use std::time::Duration;

use backoff::ExponentialBackoff;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::Error;
use crate::tls::TlsConfig;

const fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_originator() -> String {
    "xenapi-rs".to_string()
}

fn default_client_version() -> String {
    "1.0".to_string()
}

/// Everything a [`Session`](crate::Session) needs to reach the server.
///
/// ```yaml
/// endpoint: https://xen-master.example.com/
/// timeout: 30s
/// tls:
///   ca: /etc/ssl/xen-pool.pem
/// task_poll:
///   initial: 500ms
///   max_delay: 10s
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// The XML-RPC endpoint of the pool coordinator, usually the root path.
    pub endpoint: Url,

    /// Upper bound of a single request, connecting included.
    #[serde(default = "default_timeout", with = "humanize::duration::serde")]
    pub timeout: Duration,

    /// Only used for `https` endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,

    /// Defaults to `xenapi/<version>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Sent on login, shows up in the server's session records.
    #[serde(default = "default_originator")]
    pub originator: String,

    /// The API version string sent on password login.
    #[serde(default = "default_client_version")]
    pub client_version: String,

    /// Query the coordinator's API version right after login.
    #[serde(default)]
    pub discover_versions: bool,

    #[serde(default)]
    pub task_poll: PollConfig,
}

impl ClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            timeout: default_timeout(),
            tls: None,
            user_agent: None,
            originator: default_originator(),
            client_version: default_client_version(),
            discover_versions: false,
            task_poll: PollConfig::default(),
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        serde_yaml::from_str(text).map_err(|err| Error::argument("ClientConfig", err))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|err| Error::argument(format!("ClientConfig({})", path.display()), err))?;

        Self::from_yaml(&text)
    }

    pub(crate) fn user_agent(&self) -> String {
        match &self.user_agent {
            Some(ua) => ua.clone(),
            None => format!("xenapi/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

const fn default_initial() -> Duration {
    Duration::from_millis(200)
}

const fn default_multiplier() -> u32 {
    2
}

const fn default_max_delay() -> Duration {
    Duration::from_secs(5)
}

const fn default_reap() -> bool {
    true
}

/// How [`task::wait`](crate::task::wait) polls a task.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PollConfig {
    #[serde(default = "default_initial", with = "humanize::duration::serde")]
    pub initial: Duration,

    #[serde(default = "default_multiplier")]
    pub multiplier: u32,

    #[serde(default = "default_max_delay", with = "humanize::duration::serde")]
    pub max_delay: Duration,

    /// Destroy the task once it reached a terminal state.
    #[serde(default = "default_reap")]
    pub reap: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            multiplier: default_multiplier(),
            max_delay: default_max_delay(),
            reap: default_reap(),
        }
    }
}

impl PollConfig {
    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff::new(self.initial)
            .multiplier(self.multiplier)
            .max_delay(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal() {
        let config = ClientConfig::from_yaml("endpoint: http://127.0.0.1:8080/").unwrap();

        assert_eq!(config, ClientConfig::new("http://127.0.0.1:8080/".parse().unwrap()));
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.originator, "xenapi-rs");
        assert_eq!(config.client_version, "1.0");
        assert!(config.task_poll.reap);
        assert!(config.user_agent().starts_with("xenapi/"));
    }

    #[test]
    fn full() {
        let config = ClientConfig::from_yaml(
            r#"
endpoint: https://xen.example.com/
timeout: 15s
tls:
  ca: /etc/ssl/xen.pem
  verify_hostname: false
user_agent: inventory/2
originator: inventory
client_version: "2.21"
discover_versions: true
task_poll:
  initial: 50ms
  multiplier: 3
  max_delay: 2s
  reap: false
"#,
        )
        .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(15));
        let tls = config.tls.as_ref().unwrap();
        assert!(!tls.verify_hostname);
        assert!(tls.verify_certificate);
        assert_eq!(config.user_agent(), "inventory/2");
        assert_eq!(config.client_version, "2.21");
        assert!(config.discover_versions);
        assert_eq!(
            config.task_poll,
            PollConfig {
                initial: Duration::from_millis(50),
                multiplier: 3,
                max_delay: Duration::from_secs(2),
                reap: false,
            }
        );
    }

    #[test]
    fn unknown_field() {
        let err = ClientConfig::from_yaml("endpoint: http://a/\npassword: x").unwrap_err();
        assert!(err.to_string().contains("password"), "{err}");
    }

    #[test]
    fn poll_backoff() {
        let mut backoff = PollConfig::default().backoff();
        let delays = (0..7)
            .map(|_| backoff.next_delay().as_millis())
            .collect::<Vec<_>>();

        assert_eq!(delays, [200, 400, 800, 1600, 3200, 5000, 5000]);
    }
}
