//! Waiting for the server tasks started by the `async_*` operations.
//!
//! ```no_run
//! # async fn run(session: &xenapi::Session, host: &xenapi::api::HostRef,
//! #     network: &xenapi::api::NetworkRef) -> Result<(), xenapi::Error> {
//! use xenapi::{api, task};
//!
//! let pending = api::host::async_evacuate(session, host, network, 10).await?;
//! task::wait_for::<()>(session, &pending).await?;
//! # Ok(())
//! # }
//! ```

use xmlrpc::{MethodResponse, Value};

use crate::api::{self, TaskRef, TaskStatusType};
use crate::marshal::FromValue;
use crate::{Error, RpcError, Session, codes};

/// Polls the task until it reached a terminal state and returns the raw
/// result string on success.
///
/// Polling backs off as configured by [`PollConfig`](crate::PollConfig),
/// which also decides whether the task is destroyed afterwards. A failed or
/// cancelled task turns into an RPC error built from its error info.
pub async fn wait(session: &Session, task: &TaskRef) -> Result<String, Error> {
    wait_with(session, task, |result| Ok(result.to_string())).await
}

/// Like [`wait`], with the result string passed through `reconstruct`.
pub async fn wait_with<T, F>(session: &Session, task: &TaskRef, reconstruct: F) -> Result<T, Error>
where
    F: FnOnce(&str) -> Result<T, Error>,
{
    let poll = &session.config().task_poll;
    let mut backoff = poll.backoff();

    // once a terminal status was seen the task is reaped, whatever the
    // follow-up calls returned
    let outcome = loop {
        let status = api::task::get_status(session, task).await?;
        match &status {
            TaskStatusType::Pending | TaskStatusType::Cancelling => {}
            TaskStatusType::Success => break api::task::get_result(session, task).await,
            TaskStatusType::Failure | TaskStatusType::Cancelled => {
                break Err(match task_error(session, task, &status).await {
                    Ok(err) => err.into(),
                    Err(err) => err,
                });
            }
            TaskStatusType::Unknown(tag) => {
                warn!(message = "Unknown task status, keep polling", %task, status = %tag);
            }
        }

        backoff.wait().await;
    };

    if poll.reap {
        if let Err(err) = api::task::destroy(session, task).await {
            warn!(message = "Failed to destroy finished task", %task, %err);
        }
    }

    debug!(message = "Task finished", %task, success = outcome.is_ok());

    reconstruct(&outcome?)
}

/// Waits for the task and decodes its result as a `T`.
///
/// Results arrive as XML fragments such as `<value>OpaqueRef:..</value>`,
/// operations without a result leave it empty.
pub async fn wait_for<T: FromValue>(session: &Session, task: &TaskRef) -> Result<T, Error> {
    wait_with(session, task, |result| {
        T::from_value("task.get_result -> ", &parse_result(result)?)
    })
    .await
}

/// Decodes the result string of a successful task.
pub fn parse_result(result: &str) -> Result<Value, Error> {
    let trimmed = result.trim();
    if trimmed.is_empty() {
        return Ok(Value::Nil);
    }
    if !trimmed.starts_with('<') {
        return Ok(Value::String(trimmed.to_string()));
    }

    let document =
        format!("<methodResponse><params><param>{trimmed}</param></params></methodResponse>");
    match xmlrpc::decode_response(document.as_bytes()) {
        Ok(MethodResponse::Params(value)) => Ok(value),
        Ok(MethodResponse::Fault(_)) => Err(Error::deserialize(
            "task.get_result -> ",
            "unexpected fault in task result",
        )),
        Err(err) => Err(Error::deserialize("task.get_result -> ", err)),
    }
}

async fn task_error(
    session: &Session,
    task: &TaskRef,
    status: &TaskStatusType,
) -> Result<RpcError, Error> {
    let info = api::task::get_error_info(session, task).await?;
    // the name label of an async task is the method it runs
    let method = match api::task::get_name_label(session, task).await {
        Ok(name) if !name.is_empty() => name,
        _ => task.to_string(),
    };

    let mut parts = info.into_iter();
    let err = match parts.next() {
        Some(code) => RpcError::new(method, code, parts),
        None if *status == TaskStatusType::Cancelled => {
            RpcError::new(method, codes::TASK_CANCELLED, [task.to_string()])
        }
        None => RpcError::new(method, "", Vec::<String>::new()),
    };

    Ok(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::VmRef;

    #[test]
    fn result_fragments() {
        assert_eq!(parse_result("").unwrap(), Value::Nil);
        assert_eq!(
            parse_result("<value>OpaqueRef:vm</value>").unwrap(),
            Value::from("OpaqueRef:vm")
        );
        assert_eq!(
            parse_result("<value><array><data><value>a</value></data></array></value>").unwrap(),
            Value::Array(vec!["a".into()])
        );
        assert_eq!(parse_result("plain").unwrap(), Value::from("plain"));

        let vm = VmRef::from_value("", &parse_result(" <value>OpaqueRef:1</value>\n").unwrap());
        assert_eq!(vm.unwrap(), VmRef::new("OpaqueRef:1"));
    }

    #[test]
    fn broken_fragment() {
        let err = parse_result("<value><int>x</int></value>").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Deserialize);
    }
}
