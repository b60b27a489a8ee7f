//! Conversions between Rust types and the XML-RPC value tree.
//!
//! Every conversion takes a context string naming where the value sits,
//! `host.get_record -> .other_config[2][1]` for instance, so a failure deep
//! inside a record still points at the offending member.

#[macro_use]
mod macros;
mod reference;

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use xmlrpc::Value;

pub use reference::{Class, Ref};

use crate::Error;

/// Converts a value into its wire form.
pub trait ToValue {
    fn to_value(&self, context: &str) -> Result<Value, Error>;
}

/// Builds a value from its wire form.
pub trait FromValue: Sized {
    fn from_value(context: &str, value: &Value) -> Result<Self, Error>;
}

fn mismatch(context: &str, expected: &str, value: &Value) -> Error {
    Error::deserialize(
        context,
        format!("expected {expected}, got {}", value.type_name()),
    )
}

#[doc(hidden)]
pub fn expect_str<'a>(context: &str, value: &'a Value) -> Result<&'a str, Error> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(mismatch(context, "string", other)),
    }
}

#[doc(hidden)]
pub fn expect_struct<'a>(
    context: &str,
    value: &'a Value,
) -> Result<&'a IndexMap<String, Value>, Error> {
    match value {
        Value::Struct(members) => Ok(members),
        other => Err(mismatch(context, "struct", other)),
    }
}

/// Reads one record member. Members the record does not declare are
/// never looked at.
#[doc(hidden)]
pub fn field<T: FromValue>(
    context: &str,
    members: &IndexMap<String, Value>,
    name: &str,
) -> Result<T, Error> {
    let context = format!("{context}.{name}");
    match members.get(name) {
        Some(value) => T::from_value(&context, value),
        None => Err(Error::deserialize(context, "missing field")),
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self, context: &str) -> Result<Value, Error> {
        (**self).to_value(context)
    }
}

impl ToValue for str {
    fn to_value(&self, _context: &str) -> Result<Value, Error> {
        Ok(Value::String(self.to_string()))
    }
}

impl ToValue for String {
    fn to_value(&self, context: &str) -> Result<Value, Error> {
        self.as_str().to_value(context)
    }
}

impl FromValue for String {
    fn from_value(context: &str, value: &Value) -> Result<Self, Error> {
        expect_str(context, value).map(ToString::to_string)
    }
}

// The wire integer is 32 bits wide, wider values travel as decimal strings.
impl ToValue for i64 {
    fn to_value(&self, _context: &str) -> Result<Value, Error> {
        if i32::try_from(*self).is_ok() {
            Ok(Value::Int(*self))
        } else {
            Ok(Value::String(self.to_string()))
        }
    }
}

impl FromValue for i64 {
    fn from_value(context: &str, value: &Value) -> Result<Self, Error> {
        match value {
            Value::Int(i) => Ok(*i),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|err| Error::deserialize(context, format!("invalid integer {s:?}, {err}"))),
            other => Err(mismatch(context, "int", other)),
        }
    }
}

impl ToValue for f64 {
    fn to_value(&self, context: &str) -> Result<Value, Error> {
        if self.is_finite() {
            Ok(Value::Double(*self))
        } else {
            Err(Error::argument(context, format!("{self} is not a finite double")))
        }
    }
}

impl FromValue for f64 {
    fn from_value(context: &str, value: &Value) -> Result<Self, Error> {
        match value {
            Value::Double(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|err| Error::deserialize(context, format!("invalid double {s:?}, {err}"))),
            other => Err(mismatch(context, "double", other)),
        }
    }
}

impl ToValue for bool {
    fn to_value(&self, _context: &str) -> Result<Value, Error> {
        Ok(Value::Bool(*self))
    }
}

impl FromValue for bool {
    fn from_value(context: &str, value: &Value) -> Result<Self, Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
            other => Err(mismatch(context, "boolean", other)),
        }
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self, _context: &str) -> Result<Value, Error> {
        Ok(Value::DateTime(*self))
    }
}

impl FromValue for DateTime<Utc> {
    fn from_value(context: &str, value: &Value) -> Result<Self, Error> {
        match value {
            Value::DateTime(dt) => Ok(*dt),
            Value::String(s) => xmlrpc::parse_datetime(s)
                .ok_or_else(|| Error::deserialize(context, format!("invalid timestamp {s:?}"))),
            other => Err(mismatch(context, "dateTime.iso8601", other)),
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self, context: &str) -> Result<Value, Error> {
        self.iter()
            .enumerate()
            .map(|(i, item)| item.to_value(&format!("{context}[{i}]")))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self, context: &str) -> Result<Value, Error> {
        self.as_slice().to_value(context)
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(context: &str, value: &Value) -> Result<Self, Error> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| T::from_value(&format!("{context}[{i}]"), item))
                .collect(),
            other => Err(mismatch(context, "array", other)),
        }
    }
}

/// Maps go out as a list of `[key, value]` pairs.
impl<K: ToValue, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self, context: &str) -> Result<Value, Error> {
        self.iter()
            .enumerate()
            .map(|(i, (key, value))| {
                Ok(Value::Array(vec![
                    key.to_value(&format!("{context}[{i}][0]"))?,
                    value.to_value(&format!("{context}[{i}][1]"))?,
                ]))
            })
            .collect::<Result<Vec<_>, Error>>()
            .map(Value::Array)
    }
}

/// Accepts the pair list as well as the struct form the server sends.
impl<K, V> FromValue for HashMap<K, V>
where
    K: FromValue + Eq + Hash,
    V: FromValue,
{
    fn from_value(context: &str, value: &Value) -> Result<Self, Error> {
        match value {
            Value::Array(pairs) => pairs
                .iter()
                .enumerate()
                .map(|(i, pair)| match pair {
                    Value::Array(kv) if kv.len() == 2 => Ok((
                        K::from_value(&format!("{context}[{i}][0]"), &kv[0])?,
                        V::from_value(&format!("{context}[{i}][1]"), &kv[1])?,
                    )),
                    Value::Array(kv) => Err(Error::deserialize(
                        format!("{context}[{i}]"),
                        format!("expected a key/value pair, got {} items", kv.len()),
                    )),
                    other => Err(mismatch(&format!("{context}[{i}]"), "key/value pair", other)),
                })
                .collect(),
            Value::Struct(members) => members
                .iter()
                .map(|(key, value)| {
                    let context = format!("{context}[{key}]");
                    Ok((
                        K::from_value(&context, &Value::String(key.clone()))?,
                        V::from_value(&context, value)?,
                    ))
                })
                .collect(),
            other => Err(mismatch(context, "map", other)),
        }
    }
}

impl ToValue for () {
    fn to_value(&self, _context: &str) -> Result<Value, Error> {
        Ok(Value::Nil)
    }
}

/// Void results, whatever the server sent is dropped.
impl FromValue for () {
    fn from_value(_context: &str, _value: &Value) -> Result<Self, Error> {
        Ok(())
    }
}

impl ToValue for Value {
    fn to_value(&self, _context: &str) -> Result<Value, Error> {
        Ok(self.clone())
    }
}

impl FromValue for Value {
    fn from_value(_context: &str, value: &Value) -> Result<Self, Error> {
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn round_trip<T>(value: T) -> T
    where
        T: ToValue + FromValue,
    {
        let wire = value.to_value("test").unwrap();
        let encoded = xmlrpc::encode_response(&wire).unwrap();
        match xmlrpc::decode_response(&encoded).unwrap() {
            xmlrpc::MethodResponse::Params(decoded) => T::from_value("test", &decoded).unwrap(),
            xmlrpc::MethodResponse::Fault(fault) => panic!("unexpected fault {fault:?}"),
        }
    }

    #[test]
    fn strings() {
        assert_eq!(round_trip(String::new()), "");
        assert_eq!(
            round_trip(r#"<tag attr="v">&amp; 'q'</tag>"#.to_string()),
            r#"<tag attr="v">&amp; 'q'</tag>"#
        );
        assert_eq!(round_trip("ünïcødé ✓".to_string()), "ünïcødé ✓");
    }

    #[test]
    fn integer_range() {
        for i in [0, 1, -1, i32::MAX as i64, i32::MIN as i64] {
            assert_eq!(i.to_value("").unwrap(), Value::Int(i));
            assert_eq!(round_trip(i), i);
        }

        for i in [1i64 << 31, -(1i64 << 31) - 1, 1 << 62, -(1 << 62), i64::MAX, i64::MIN] {
            assert_eq!(i.to_value("").unwrap(), Value::String(i.to_string()));
            assert_eq!(round_trip(i), i);
        }
    }

    #[test]
    fn integer_from_string() {
        assert_eq!(i64::from_value("", &Value::from(" 42 ")).unwrap(), 42);

        let err = i64::from_value("VM.get_memory_target -> ", &Value::from("lots")).unwrap_err();
        assert!(err.to_string().starts_with("VM.get_memory_target -> : invalid integer"));
    }

    #[test]
    fn doubles() {
        assert_eq!(round_trip(0.25f64), 0.25);
        assert_eq!(f64::from_value("", &Value::Int(3)).unwrap(), 3.0);
        assert_eq!(f64::from_value("", &Value::from("1.5")).unwrap(), 1.5);

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = bad.to_value("host_metrics.set(x)").unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::Argument);
        }
    }

    #[test]
    fn booleans() {
        assert!(round_trip(true));
        assert!(!round_trip(false));
        assert!(bool::from_value("", &Value::from("True")).unwrap());
        assert!(bool::from_value("", &Value::Int(1)).is_err());
    }

    #[test]
    fn timestamps() {
        let zero = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(round_trip(zero), zero);

        let want = Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 1).unwrap();
        for text in [
            "20240229T12:30:01Z",
            "20240229T12:30:01",
            "2024-02-29T12:30:01Z",
            "2024-02-29T14:30:01+02:00",
        ] {
            assert_eq!(
                DateTime::<Utc>::from_value("", &Value::from(text)).unwrap(),
                want,
                "{text}"
            );
        }

        let err = DateTime::<Utc>::from_value("task.get_created -> ", &Value::from("yesterday"))
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Deserialize);
    }

    #[test]
    fn sets() {
        assert_eq!(Vec::<String>::new().to_value("").unwrap(), Value::Array(vec![]));
        assert_eq!(round_trip(Vec::<i64>::new()), Vec::<i64>::new());
        assert_eq!(
            round_trip(vec!["a".to_string(), "b".to_string()]),
            vec!["a".to_string(), "b".to_string()]
        );

        let err = Vec::<String>::from_value(
            "pool.get_tags -> ",
            &Value::Array(vec!["a".into(), Value::Int(1)]),
        )
        .unwrap_err();
        assert_eq!(err.context(), "pool.get_tags -> [1]");
    }

    #[test]
    fn maps() {
        let empty = HashMap::<String, String>::new();
        assert_eq!(empty.to_value("").unwrap(), Value::Array(vec![]));
        assert_eq!(round_trip(empty.clone()), empty);

        let map = HashMap::from([
            ("k1".to_string(), "v1".to_string()),
            ("k2".to_string(), "v2".to_string()),
        ]);
        assert_eq!(round_trip(map.clone()), map);

        let wire = [("k1", "v1"), ("k2", "v2")].into_iter().collect::<Value>();
        assert_eq!(HashMap::<String, String>::from_value("", &wire).unwrap(), map);
    }

    #[test]
    fn map_error_paths() {
        let pairs = Value::Array(vec![Value::Array(vec!["k".into(), Value::Int(1)])]);
        let err = HashMap::<String, String>::from_value("host.get_other_config -> ", &pairs)
            .unwrap_err();
        assert_eq!(err.context(), "host.get_other_config -> [0][1]");

        let short = Value::Array(vec![Value::Array(vec!["k".into()])]);
        let err = HashMap::<String, String>::from_value("m -> ", &short).unwrap_err();
        assert_eq!(err.context(), "m -> [0]");

        let wire = [("memory", Value::from("x"))].into_iter().collect::<Value>();
        let err = HashMap::<String, i64>::from_value("m -> ", &wire).unwrap_err();
        assert_eq!(err.context(), "m -> [memory]");
    }

    #[test]
    fn void_accepts_anything() {
        assert!(<()>::from_value("", &Value::Nil).is_ok());
        assert!(<()>::from_value("", &Value::from("")).is_ok());
    }
}
