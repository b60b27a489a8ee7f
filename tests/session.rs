mod util;

use std::time::Duration;

use http::StatusCode;
use pretty_assertions::assert_eq;
use testify::xapi::{MockServer, Reply};
use xenapi::api::{self, HostRef, PoolRef, SessionRef};
use xenapi::{
    ApiVersion, ClientConfig, Error, ErrorKind, Session, TransportError, Value, codes,
};

use util::SESSION;

#[tokio::test]
async fn invoke_requires_login() {
    let server = util::server().await;
    let session = Session::new(util::config(&server)).unwrap();

    let err = api::host::get_all(&session).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Argument);
    assert_eq!(err.context(), "host.get_all(session_id)");
    assert!(server.calls().is_empty());
}

#[tokio::test]
async fn requests_are_xml_posts() {
    let (server, _session) = util::logged_in().await;

    let login = &server.calls_to("session.login_with_password")[0];
    assert_eq!(login.uri, "/");
    assert_eq!(login.headers["content-type"], "text/xml");
    assert_eq!(login.headers["cache-control"], "no-cache");
    assert!(
        login.headers["user-agent"]
            .to_str()
            .unwrap()
            .starts_with("xenapi/")
    );
}

#[tokio::test]
async fn login_failure_keeps_session_logged_out() {
    util::trace_init();
    let server = MockServer::start().await;
    server.on(
        "session.login_with_password",
        Reply::failure(&["SESSION_AUTHENTICATION_FAILED", "root", "bad password"]),
    );

    let session = Session::new(util::config(&server)).unwrap();
    let err = session.login_with_password("root", "nope").await.unwrap_err();

    assert!(err.is(codes::SESSION_AUTHENTICATION_FAILED));
    assert_eq!(err.params(), ["root", "bad password"]);
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn status_envelope_is_unwrapped() {
    let (server, session) = util::logged_in().await;
    server.on(
        "host.get_all",
        Reply::success(Value::Array(vec!["OpaqueRef:H1".into()])),
    );
    server.on(
        "host.get_name_label",
        Reply::failure(&["HANDLE_INVALID", "host", "OpaqueRef:H9"]),
    );

    let hosts = api::host::get_all(&session).await.unwrap();
    assert_eq!(hosts, vec![HostRef::new("OpaqueRef:H1")]);

    let err = api::host::get_name_label(&session, &HostRef::new("OpaqueRef:H9"))
        .await
        .unwrap_err();
    assert!(err.is(codes::HANDLE_INVALID));
    assert_eq!(err.params(), ["host", "OpaqueRef:H9"]);
    match err {
        Error::Rpc(rpc) => assert_eq!(rpc.fault_code, None),
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn array_fault_string() {
    let (server, session) = util::logged_in().await;
    server.on(
        "pool.get_master",
        Reply::Fault(xmlrpc::Fault::new(
            1,
            Value::Array(vec!["SESSION_INVALID".into(), SESSION.into()]),
        )),
    );

    let err = api::pool::get_master(&session, &PoolRef::new("OpaqueRef:P1"))
        .await
        .unwrap_err();

    assert!(err.is(codes::SESSION_INVALID));
    assert_eq!(err.params(), [SESSION]);
}

#[tokio::test]
async fn unknown_method_fault() {
    let (_server, session) = util::logged_in().await;

    let err = session
        .invoke("host.no_such_call", Vec::new())
        .await
        .unwrap_err();

    assert!(err.is(codes::MESSAGE_METHOD_UNKNOWN));
    assert_eq!(err.params(), ["host.no_such_call"]);
}

#[tokio::test]
async fn null_reference_decodes() {
    let (server, session) = util::logged_in().await;
    server.on("pool.get_master", Reply::value("OpaqueRef:NULL"));

    let master = api::pool::get_master(&session, &PoolRef::new("OpaqueRef:P1"))
        .await
        .unwrap();

    assert!(master.is_null());
    assert_eq!(master, HostRef::NULL);
}

#[tokio::test]
async fn wrong_result_shape_is_a_deserialize_error() {
    let (server, session) = util::logged_in().await;
    server.on("host.get_all", Reply::value("OpaqueRef:H1"));

    let err = api::host::get_all(&session).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Deserialize);
    assert_eq!(err.context(), "host.get_all -> ");
}

#[tokio::test]
async fn http_status_is_a_transport_error() {
    let (server, session) = util::logged_in().await;
    server.on(
        "host.get_all",
        Reply::Status(StatusCode::INTERNAL_SERVER_ERROR),
    );

    let err = api::host::get_all(&session).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.context(), "host.get_all");
    assert!(err.to_string().contains("500"), "{err}");
}

#[tokio::test]
async fn malformed_body_is_a_transport_error() {
    let (server, session) = util::logged_in().await;
    server.on("host.get_all", Reply::Body("<html>gateway</html>".to_string()));

    let err = api::host::get_all(&session).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(
        matches!(
            &err,
            Error::Transport {
                source: TransportError::Decode(_),
                ..
            }
        ),
        "{err:?}"
    );
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = util::server().await;
    server.on(
        "host.get_all",
        Reply::delayed(Duration::from_secs(5), Reply::refs(&[])),
    );

    let mut config = util::config(&server);
    config.timeout = Duration::from_millis(200);
    let session = Session::new(config).unwrap();
    session.login_with_password("root", "secret").await.unwrap();

    let err = api::host::get_all(&session).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains("no response within"), "{err}");
}

#[tokio::test]
async fn connection_refused() {
    util::trace_init();
    let addr = testify::next_addr();
    let config = ClientConfig::new(format!("http://{addr}/").parse().unwrap());
    let session = Session::new(config).unwrap();

    let err = session
        .login_with_password("root", "secret")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.context(), "session.login_with_password");
}

#[tokio::test]
async fn logout_clears_reference() {
    let (server, session) = util::logged_in().await;

    session.logout().await.unwrap();
    assert!(!session.is_logged_in());

    // a second logout has nothing to end
    session.logout().await.unwrap();

    let logouts = server.calls_to("session.logout");
    assert_eq!(logouts.len(), 1);
    assert_eq!(logouts[0].params, vec![Value::from(SESSION)]);
}

#[tokio::test]
async fn scope_logs_out_on_error() {
    let (server, session) = util::logged_in().await;
    server.on("host.get_all", Reply::fault(&["INTERNAL_ERROR", "boom"]));

    let err = session
        .scope(async |session| api::host::get_all(session).await)
        .await
        .unwrap_err();

    assert!(err.is(codes::INTERNAL_ERROR));
    assert!(!session.is_logged_in());
    assert_eq!(server.calls_to("session.logout").len(), 1);
}

#[tokio::test]
async fn scope_returns_value() {
    let (server, session) = util::logged_in().await;
    server.on("host.get_all", Reply::refs(&["OpaqueRef:H1"]));

    let hosts = session
        .scope(async |session| api::host::get_all(session).await)
        .await
        .unwrap();

    assert_eq!(hosts.len(), 1);
    assert_eq!(
        server.methods(),
        [
            "session.login_with_password",
            "host.get_all",
            "session.logout"
        ]
    );
}

#[tokio::test]
async fn relogin_swaps_reference() {
    let (server, session) = util::logged_in().await;
    server.on("session.login_with_password", Reply::value("OpaqueRef:S2"));
    server.on("host.get_all", Reply::refs(&[]));

    session.relogin().await.unwrap();
    api::host::get_all(&session).await.unwrap();

    assert_eq!(session.reference(), Some(SessionRef::new("OpaqueRef:S2")));
    let logins = server.calls_to("session.login_with_password");
    assert_eq!(logins.len(), 2);
    assert_eq!(logins[1].params[0], Value::from("root"));
    assert_eq!(
        server.calls_to("host.get_all")[0].session(),
        Some("OpaqueRef:S2")
    );
}

#[tokio::test]
async fn token_login() {
    util::trace_init();
    let server = MockServer::start().await;
    server.on("session.get_uuid", Reply::value("5b1e0c9a"));

    let session = Session::new(util::config(&server)).unwrap();
    session.login_with_token("OpaqueRef:T0K3N").await.unwrap();

    assert_eq!(session.reference(), Some(SessionRef::new("OpaqueRef:T0K3N")));
    assert_eq!(
        server.calls_to("session.get_uuid")[0].params,
        vec![Value::from("OpaqueRef:T0K3N"), Value::from("OpaqueRef:T0K3N")]
    );

    // no password to repeat
    let err = session.relogin().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[tokio::test]
async fn slave_local_login() {
    util::trace_init();
    let server = MockServer::start().await;
    server.on(
        "session.slave_local_login_with_password",
        Reply::value("OpaqueRef:L1"),
    );
    server.on("session.local_logout", Reply::nil());

    let session = Session::new(util::config(&server)).unwrap();
    session.login_slave_local("root", "secret").await.unwrap();
    assert_eq!(session.reference(), Some(SessionRef::new("OpaqueRef:L1")));

    session.logout_local().await.unwrap();
    assert!(!session.is_logged_in());
    assert_eq!(
        server.methods(),
        [
            "session.slave_local_login_with_password",
            "session.local_logout"
        ]
    );
}

fn version_server(server: &MockServer, major: i64, minor: i64) {
    server.on("pool.get_all", Reply::refs(&["OpaqueRef:P1"]));
    server.on("pool.get_master", Reply::value("OpaqueRef:H1"));
    server.on("host.get_API_version_major", Reply::Value(Value::Int(major)));
    server.on("host.get_API_version_minor", Reply::Value(Value::Int(minor)));
    server.on(
        "host.get_software_version",
        Reply::Value(
            [
                ("product_version", Value::from("8.4.0")),
                ("xapi", Value::from("24.19")),
            ]
            .into_iter()
            .collect(),
        ),
    );
}

#[tokio::test]
async fn versions_discovered_after_login() {
    let server = util::server().await;
    version_server(&server, 2, 21);

    let mut config = util::config(&server);
    config.discover_versions = true;
    let session = Session::new(config).unwrap();
    assert_eq!(session.api_version(), ApiVersion::Unknown);

    session.login_with_password("root", "secret").await.unwrap();

    assert_eq!(session.api_version(), ApiVersion::V2_21);
    assert_eq!(session.xapi_version().as_deref(), Some("24.19"));
    assert_eq!(
        server.calls_to("host.get_software_version")[0].params[1],
        Value::from("OpaqueRef:H1")
    );
}

#[tokio::test]
async fn unknown_server_version() {
    let (server, session) = util::logged_in().await;
    version_server(&server, 3, 0);

    let version = session.discover_versions().await.unwrap();

    assert_eq!(version, ApiVersion::Unknown);
    assert_eq!(session.xapi_version().as_deref(), Some("24.19"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_invokes_share_one_session() {
    let (server, session) = util::logged_in().await;
    server.on_fn("host.get_name_label", |call| {
        let host = call.params.get(1).and_then(Value::as_str).unwrap_or("");
        Reply::value(format!("name of {host}"))
    });

    let tasks = (0..16)
        .map(|i| {
            let session = session.clone();
            tokio::spawn(async move {
                let host = HostRef::new(format!("OpaqueRef:H{i}"));
                let name = api::host::get_name_label(&session, &host).await.unwrap();
                assert_eq!(name, format!("name of OpaqueRef:H{i}"));
            })
        })
        .collect::<Vec<_>>();

    for result in futures::future::join_all(tasks).await {
        result.unwrap();
    }

    let calls = server.calls_to("host.get_name_label");
    assert_eq!(calls.len(), 16);
    assert!(calls.iter().all(|call| call.session() == Some(SESSION)));
}
