//! XML-RPC codec
//!
//! http://xmlrpc.com/spec.md

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode_call, decode_response};
pub use encode::{encode_call, encode_fault, encode_response};
pub use error::Error;
pub use value::{DATETIME_FORMAT, Value, format_datetime, parse_datetime};

/// The `<fault>` payload of a response.
#[derive(Clone, Debug, PartialEq)]
pub struct Fault {
    pub code: i64,
    /// The raw `faultString` member, servers put structured data in here.
    pub message: Value,
}

impl Fault {
    pub fn new(code: i64, message: impl Into<Value>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MethodResponse {
    Params(Value),
    Fault(Fault),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub params: Vec<Value>,
}
