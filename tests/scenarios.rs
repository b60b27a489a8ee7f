//! End to end conversations with a scripted server, one test per workflow
//! a client typically goes through.

mod util;

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use testify::xapi::Reply;
use xenapi::api::{self, HostDisplay, HostRef, NetworkRef, PifRef, SessionRef, VlanRef};
use xenapi::{ErrorKind, Session, Value, codes, task};

use util::SESSION;

#[tokio::test]
async fn login_then_list_hosts() {
    let server = util::server().await;
    server.on("host.get_all", Reply::refs(&["OpaqueRef:H1", "OpaqueRef:H2"]));

    let mut config = util::config(&server);
    config.originator = "test".to_string();
    let session = Session::new(config).unwrap();
    session.login_with_password("u", "p").await.unwrap();

    assert_eq!(session.reference(), Some(SessionRef::new(SESSION)));

    let login = server.calls_to("session.login_with_password");
    assert_eq!(login.len(), 1);
    assert_eq!(
        login[0].params,
        vec![
            Value::from("u"),
            Value::from("p"),
            Value::from("1.0"),
            Value::from("test"),
        ]
    );

    let hosts = api::host::get_all(&session).await.unwrap();
    assert_eq!(
        hosts,
        vec![HostRef::new("OpaqueRef:H1"), HostRef::new("OpaqueRef:H2")]
    );

    let listed = server.calls_to("host.get_all");
    assert_eq!(listed[0].params, vec![Value::from(SESSION)]);
}

#[tokio::test]
async fn record_with_nested_map() {
    let (server, session) = util::logged_in().await;

    let other_config: Value = [("k1", Value::from("v1")), ("k2", Value::from("v2"))]
        .into_iter()
        .collect();
    let record: Value = [
        ("uuid", Value::from("8f3c7a4e-0b7e-4a53-9d3c-2f1d5e6a7b8c")),
        ("tagged_PIF", Value::from("OpaqueRef:P1")),
        ("untagged_PIF", Value::from("OpaqueRef:P2")),
        ("tag", Value::from("42")),
        ("other_config", other_config.clone()),
    ]
    .into_iter()
    .collect();
    server.on("VLAN.get_record", Reply::Value(record));
    server.on("host.get_other_config", Reply::Value(other_config));

    let expected: HashMap<String, String> = [("k1", "v1"), ("k2", "v2")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let vlan = api::vlan::get_record(&session, &VlanRef::new("OpaqueRef:V1"))
        .await
        .unwrap();
    assert_eq!(vlan.tagged_pif, PifRef::new("OpaqueRef:P1"));
    assert_eq!(vlan.tag, 42);
    assert_eq!(vlan.other_config, expected);

    let host_config = api::host::get_other_config(&session, &HostRef::new("OpaqueRef:H1"))
        .await
        .unwrap();
    assert_eq!(host_config, expected);
}

#[tokio::test]
async fn set_operations_are_sent_every_time() {
    let (server, session) = util::logged_in().await;
    server.on("host.add_tags", Reply::nil());

    let host = HostRef::new("OpaqueRef:H1");
    api::host::add_tags(&session, &host, "x").await.unwrap();
    api::host::add_tags(&session, &host, "x").await.unwrap();

    let calls = server.calls_to("host.add_tags");
    assert_eq!(calls.len(), 2);
    for call in calls {
        assert_eq!(
            call.params,
            vec![
                Value::from(SESSION),
                Value::from("OpaqueRef:H1"),
                Value::from("x"),
            ]
        );
    }
}

#[tokio::test]
async fn fault_becomes_rpc_error() {
    let (server, session) = util::logged_in().await;
    server.on(
        "host.set_hostname_live",
        Reply::fault(&["HOST_NAME_INVALID", "bad name"]),
    );

    let err = api::host::set_hostname_live(&session, &HostRef::new("OpaqueRef:H1"), "bad name")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Rpc);
    assert!(err.is(codes::HOST_NAME_INVALID));
    assert_eq!(err.params(), ["bad name"]);
    assert_eq!(err.context(), "host.set_hostname_live");
    assert_eq!(
        err.to_string(),
        "host.set_hostname_live: server error HOST_NAME_INVALID [bad name]"
    );
}

#[tokio::test]
async fn async_evacuate_runs_to_completion() {
    let (server, session) = util::logged_in().await;
    server.on("Async.host.evacuate", Reply::value("OpaqueRef:T1"));
    server.on_sequence(
        "task.get_status",
        [
            Reply::value("pending"),
            Reply::value("pending"),
            Reply::value("success"),
        ],
    );
    server.on("task.get_result", Reply::value(""));
    server.on("task.destroy", Reply::nil());

    let pending = api::host::async_evacuate(
        &session,
        &HostRef::new("OpaqueRef:H1"),
        &NetworkRef::new("OpaqueRef:N1"),
        10,
    )
    .await
    .unwrap();
    assert_eq!(pending, api::TaskRef::new("OpaqueRef:T1"));

    task::wait_for::<()>(&session, &pending).await.unwrap();

    let started = server.calls_to("Async.host.evacuate");
    assert_eq!(
        started[0].params,
        vec![
            Value::from(SESSION),
            Value::from("OpaqueRef:H1"),
            Value::from("OpaqueRef:N1"),
            Value::Int(10),
        ]
    );
    assert_eq!(server.calls_to("task.get_status").len(), 3);
    assert_eq!(server.calls_to("task.get_result").len(), 1);
    assert_eq!(server.calls_to("task.destroy").len(), 1);
}

#[tokio::test]
async fn unknown_enum_value_is_kept() {
    let (server, session) = util::logged_in().await;
    server.on("host.get_display", Reply::value("future_mode"));

    let display = api::host::get_display(&session, &HostRef::new("OpaqueRef:H1"))
        .await
        .unwrap();

    assert_eq!(display, HostDisplay::Unknown("future_mode".to_string()));
    assert_eq!(display.to_string(), "future_mode");
}
