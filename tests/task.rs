mod util;

use pretty_assertions::assert_eq;
use testify::xapi::{MockServer, Reply};
use xenapi::api::{self, NetworkRef, PifRef, TaskRef, VlanRef};
use xenapi::{ErrorKind, Session, Value, codes, task};

fn finished_task(server: &MockServer, status: &str) {
    server.on("task.get_status", Reply::value(status));
    server.on("task.get_name_label", Reply::value("Async.VM.start"));
    server.on("task.destroy", Reply::nil());
}

#[tokio::test]
async fn typed_result() {
    let (server, session) = util::logged_in().await;
    server.on("Async.VLAN.create", Reply::value("OpaqueRef:T1"));
    server.on_sequence(
        "task.get_status",
        [Reply::value("pending"), Reply::value("success")],
    );
    server.on(
        "task.get_result",
        Reply::value("<value>OpaqueRef:V1</value>"),
    );
    server.on("task.destroy", Reply::nil());

    let pending = api::vlan::async_create(
        &session,
        &PifRef::new("OpaqueRef:P1"),
        42,
        &NetworkRef::new("OpaqueRef:N1"),
    )
    .await
    .unwrap();
    let vlan = task::wait_for::<VlanRef>(&session, &pending).await.unwrap();

    assert_eq!(vlan, VlanRef::new("OpaqueRef:V1"));
    assert_eq!(
        server.calls_to("Async.VLAN.create")[0].params[2],
        Value::Int(42)
    );
}

#[tokio::test]
async fn raw_result_and_reconstruct() {
    let (server, session) = util::logged_in().await;
    finished_task(&server, "success");
    server.on("task.get_result", Reply::value("<value>17</value>"));

    let t1 = TaskRef::new("OpaqueRef:T1");
    let raw = task::wait(&session, &t1).await.unwrap();
    assert_eq!(raw, "<value>17</value>");

    let length = task::wait_with(&session, &t1, |result| Ok(result.len()))
        .await
        .unwrap();
    assert_eq!(length, 17);
}

#[tokio::test]
async fn failure_uses_error_info() {
    let (server, session) = util::logged_in().await;
    finished_task(&server, "failure");
    server.on(
        "task.get_error_info",
        Reply::refs(&["VM_BAD_POWER_STATE", "OpaqueRef:VM1", "halted", "running"]),
    );

    let err = task::wait(&session, &TaskRef::new("OpaqueRef:T1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Rpc);
    assert!(err.is(codes::VM_BAD_POWER_STATE));
    assert_eq!(err.params(), ["OpaqueRef:VM1", "halted", "running"]);
    assert_eq!(err.context(), "Async.VM.start");
    assert_eq!(server.calls_to("task.destroy").len(), 1);
}

#[tokio::test]
async fn cancelled_without_info() {
    let (server, session) = util::logged_in().await;
    finished_task(&server, "cancelled");
    server.on("task.get_error_info", Reply::refs(&[]));
    server.on("task.get_name_label", Reply::value(""));

    let err = task::wait(&session, &TaskRef::new("OpaqueRef:T1"))
        .await
        .unwrap_err();

    assert!(err.is(codes::TASK_CANCELLED));
    assert_eq!(err.params(), ["OpaqueRef:T1"]);
    // without a name label the task itself names the failure
    assert_eq!(err.context(), "OpaqueRef:T1");
}

#[tokio::test]
async fn unknown_status_keeps_polling() {
    let (server, session) = util::logged_in().await;
    finished_task(&server, "success");
    server.on_sequence(
        "task.get_status",
        [
            Reply::value("paused"),
            Reply::value("cancelling"),
            Reply::value("success"),
        ],
    );
    server.on("task.get_result", Reply::value(""));

    task::wait_for::<()>(&session, &TaskRef::new("OpaqueRef:T1"))
        .await
        .unwrap();

    assert_eq!(server.calls_to("task.get_status").len(), 3);
}

#[tokio::test]
async fn reaping_can_be_disabled() {
    let server = util::server().await;
    finished_task(&server, "success");
    server.on("task.get_result", Reply::value(""));

    let mut config = util::config(&server);
    config.task_poll.reap = false;
    let session = Session::new(config).unwrap();
    session.login_with_password("root", "secret").await.unwrap();

    task::wait(&session, &TaskRef::new("OpaqueRef:T1"))
        .await
        .unwrap();

    assert!(server.calls_to("task.destroy").is_empty());
}

#[tokio::test]
async fn destroy_failure_is_not_fatal() {
    let (server, session) = util::logged_in().await;
    finished_task(&server, "success");
    server.on("task.get_result", Reply::value("done"));
    server.on("task.destroy", Reply::fault(&["HANDLE_INVALID", "task", "OpaqueRef:T1"]));

    let result = task::wait(&session, &TaskRef::new("OpaqueRef:T1"))
        .await
        .unwrap();

    assert_eq!(result, "done");
}

#[tokio::test]
async fn result_of_wrong_type() {
    let (server, session) = util::logged_in().await;
    finished_task(&server, "success");
    server.on("task.get_result", Reply::value("<value><int>3</int></value>"));

    let err = task::wait_for::<VlanRef>(&session, &TaskRef::new("OpaqueRef:T1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Deserialize);
    assert_eq!(err.context(), "task.get_result -> ");
}

#[tokio::test]
async fn reaped_when_result_cannot_be_read() {
    let (server, session) = util::logged_in().await;
    finished_task(&server, "success");
    server.on(
        "task.get_result",
        Reply::fault(&["HANDLE_INVALID", "task", "OpaqueRef:T1"]),
    );

    let err = task::wait(&session, &TaskRef::new("OpaqueRef:T1"))
        .await
        .unwrap_err();

    assert!(err.is(codes::HANDLE_INVALID));
    assert_eq!(err.context(), "task.get_result");
    assert_eq!(server.calls_to("task.destroy").len(), 1);
}

#[tokio::test]
async fn reaped_when_error_info_cannot_be_read() {
    let (server, session) = util::logged_in().await;
    finished_task(&server, "failure");
    server.on("task.get_error_info", Reply::Body("not xml".to_string()));

    let err = task::wait(&session, &TaskRef::new("OpaqueRef:T1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.context(), "task.get_error_info");
    assert_eq!(server.calls_to("task.destroy").len(), 1);
}
