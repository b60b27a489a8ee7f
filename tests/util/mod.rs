#![allow(dead_code)]

use std::time::Duration;

use testify::xapi::{MockServer, Reply};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;
use xenapi::{ClientConfig, PollConfig, Session};

pub const SESSION: &str = "OpaqueRef:S1";

pub fn trace_init() {
    let level = std::env::var("TEST_LOG").unwrap_or_else(|_| "xenapi=debug".to_string());

    // tests run in parallel, only the first one installs the subscriber
    let _ = tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_env_filter(EnvFilter::new(level))
        .with_test_writer()
        .finish()
        .try_init();
}

pub fn config(server: &MockServer) -> ClientConfig {
    let mut config = ClientConfig::new(server.url().parse().unwrap());
    config.timeout = Duration::from_secs(5);
    config.task_poll = PollConfig {
        initial: Duration::from_millis(5),
        multiplier: 2,
        max_delay: Duration::from_millis(20),
        reap: true,
    };
    config
}

/// A server that accepts any password login with [`SESSION`].
pub async fn server() -> MockServer {
    trace_init();

    let server = MockServer::start().await;
    server.on("session.login_with_password", Reply::value(SESSION));
    server.on("session.logout", Reply::nil());
    server
}

/// Starts a server and returns a session already logged in to it.
pub async fn logged_in() -> (MockServer, Session) {
    let server = server().await;
    let session = Session::new(config(&server)).unwrap();
    session.login_with_password("root", "secret").await.unwrap();

    (server, session)
}
