use std::fmt;

use thiserror::Error;
use xmlrpc::{Fault, Value};

use crate::http::HttpError;

/// Why a request never produced a usable response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("encode request failed, {0}")]
    Encode(xmlrpc::Error),
    #[error("decode response failed, {0}")]
    Decode(xmlrpc::Error),
}

/// A failure reported by the server, either as an XML-RPC fault or as a
/// `Failure` status envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RpcError {
    /// The wire method name, e.g. `host.set_hostname_live`.
    pub method: String,
    /// The first element of the error description, e.g. `HOST_NAME_INVALID`.
    pub code: String,
    pub params: Vec<String>,
    /// The numeric `faultCode`, absent for status envelopes.
    pub fault_code: Option<i64>,
}

impl RpcError {
    pub fn new(
        method: impl Into<String>,
        code: impl Into<String>,
        params: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            method: method.into(),
            code: code.into(),
            params: params.into_iter().map(Into::into).collect(),
            fault_code: None,
        }
    }

    pub(crate) fn from_fault(method: &str, fault: &Fault) -> Self {
        let mut err = Self::from_description(method, &fault.message);
        err.fault_code = Some(fault.code);
        err
    }

    /// Builds the error from a description value, which is either a real
    /// array or the textual `[CODE, p1, ...]` form.
    pub(crate) fn from_description(method: &str, description: &Value) -> Self {
        let mut parts = match description {
            Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>(),
            Value::String(text) => split_description(text),
            Value::Nil => Vec::new(),
            other => vec![value_text(other)],
        }
        .into_iter();

        Self {
            method: method.to_string(),
            code: parts.next().unwrap_or_default(),
            params: parts.collect(),
            fault_code: None,
        }
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: server error {}", self.method, self.code)?;
        if !self.params.is_empty() {
            write!(f, " [{}]", self.params.join(", "))?;
        }

        Ok(())
    }
}

impl std::error::Error for RpcError {}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Int(i) => i.to_string(),
        Value::Double(f) => f.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::DateTime(dt) => xmlrpc::format_datetime(dt),
        Value::Nil => String::new(),
        other => format!("{other:?}"),
    }
}

/// Splits `[A, "b, c", 'd']` into `A`, `b, c` and `d`. Text without the
/// surrounding brackets is a bare code.
fn split_description(text: &str) -> Vec<String> {
    let text = text.trim();
    let Some(inner) = text.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
        return if text.is_empty() {
            Vec::new()
        } else {
            vec![text.to_string()]
        };
    };

    if inner.trim().is_empty() {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut quote = None;
    for ch in inner.chars() {
        match (quote, ch) {
            (None, '"' | '\'') if current.trim().is_empty() => {
                current.clear();
                quote = Some(ch);
            }
            (Some(q), c) if c == q => quote = None,
            (None, ',') => items.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    items.push(current);

    items
        .into_iter()
        .map(|item| match quote {
            // an unterminated quote keeps the raw text
            Some(_) => item,
            None => item.trim().to_string(),
        })
        .collect()
}

/// The four families of failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    Transport,
    Rpc,
    Deserialize,
}

#[derive(Debug, Error)]
pub enum Error {
    /// A caller supplied value could not be put on the wire.
    #[error("{context}: invalid argument, {reason}")]
    Argument { context: String, reason: String },

    #[error("{method}: {source}")]
    Transport {
        method: String,
        source: TransportError,
    },

    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The server answered with a value of the wrong shape.
    #[error("{context}: {reason}")]
    Deserialize { context: String, reason: String },
}

impl Error {
    pub fn argument(context: impl Into<String>, reason: impl fmt::Display) -> Self {
        Error::Argument {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    pub fn deserialize(context: impl Into<String>, reason: impl fmt::Display) -> Self {
        Error::Deserialize {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn transport(method: &str, source: impl Into<TransportError>) -> Self {
        Error::Transport {
            method: method.to_string(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Argument { .. } => ErrorKind::Argument,
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Rpc(_) => ErrorKind::Rpc,
            Error::Deserialize { .. } => ErrorKind::Deserialize,
        }
    }

    /// The server error code, only set for RPC errors.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Rpc(err) => Some(err.code.as_str()),
            _ => None,
        }
    }

    pub fn params(&self) -> &[String] {
        match self {
            Error::Rpc(err) => &err.params,
            _ => &[],
        }
    }

    /// Tests the server error code, see [`crate::codes`].
    pub fn is(&self, code: &str) -> bool {
        self.code() == Some(code)
    }

    /// The context or method the error is attached to.
    pub fn context(&self) -> &str {
        match self {
            Error::Argument { context, .. } | Error::Deserialize { context, .. } => context,
            Error::Transport { method, .. } => method,
            Error::Rpc(err) => &err.method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textual_description() {
        let err = RpcError::from_description(
            "host.set_hostname_live",
            &"[HOST_NAME_INVALID, myhost]".into(),
        );
        assert_eq!(err.code, "HOST_NAME_INVALID");
        assert_eq!(err.params, vec!["myhost"]);
        assert_eq!(err.fault_code, None);
    }

    #[test]
    fn quoted_items_keep_commas() {
        let err = RpcError::from_description(
            "VM.start",
            &r#"["VM_BAD_POWER_STATE", "OpaqueRef:a, b", 'halted']"#.into(),
        );
        assert_eq!(err.code, "VM_BAD_POWER_STATE");
        assert_eq!(err.params, vec!["OpaqueRef:a, b", "halted"]);
    }

    #[test]
    fn array_description() {
        let description = Value::Array(vec![
            "SESSION_INVALID".into(),
            "OpaqueRef:x".into(),
            Value::Int(7),
        ]);
        let err = RpcError::from_fault("host.get_all", &Fault::new(1, description));

        assert_eq!(err.code, "SESSION_INVALID");
        assert_eq!(err.params, vec!["OpaqueRef:x", "7"]);
        assert_eq!(err.fault_code, Some(1));
    }

    #[test]
    fn bare_and_empty_descriptions() {
        let err = RpcError::from_description("m", &"INTERNAL_ERROR".into());
        assert_eq!(err.code, "INTERNAL_ERROR");
        assert!(err.params.is_empty());

        for empty in ["", "[]", "  [ ] "] {
            let err = RpcError::from_description("m", &empty.into());
            assert_eq!(err.code, "");
            assert!(err.params.is_empty());
        }
    }

    #[test]
    fn accessors() {
        let err = Error::from(RpcError::new("host.destroy", "HOST_IS_LIVE", ["OpaqueRef:h"]));

        assert_eq!(err.kind(), ErrorKind::Rpc);
        assert!(err.is(crate::codes::HOST_IS_LIVE));
        assert!(!err.is(crate::codes::SESSION_INVALID));
        assert_eq!(err.params(), ["OpaqueRef:h"]);
        assert_eq!(err.context(), "host.destroy");
        assert_eq!(
            err.to_string(),
            "host.destroy: server error HOST_IS_LIVE [OpaqueRef:h]"
        );

        let err = Error::deserialize(
            "host.get_record -> .resident_VMs[3]",
            "expected string, got int",
        );
        assert_eq!(err.kind(), ErrorKind::Deserialize);
        assert_eq!(err.code(), None);
        assert!(err.params().is_empty());
        assert_eq!(
            err.to_string(),
            "host.get_record -> .resident_VMs[3]: expected string, got int"
        );
    }
}
