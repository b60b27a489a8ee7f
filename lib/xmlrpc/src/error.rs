#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed XML at byte {offset}: {reason}")]
    Xml { offset: u64, reason: String },

    #[error("unexpected element <{name}> at byte {offset}")]
    UnexpectedElement { name: String, offset: u64 },

    #[error("expected </{name}> at byte {offset}")]
    UnclosedElement { name: String, offset: u64 },

    #[error("unexpected end of document at byte {offset}")]
    UnexpectedEof { offset: u64 },

    #[error("invalid {kind} {value:?} at byte {offset}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        offset: u64,
    },

    #[error("{reason} at byte {offset}")]
    Structure { reason: &'static str, offset: u64 },

    #[error("write XML failed, {0}")]
    Write(String),
}
