use chrono::{DateTime, NaiveDateTime, Utc};
use indexmap::IndexMap;

/// Compact ISO 8601 layout used by XML-RPC, e.g. `20240102T03:04:05Z`
pub const DATETIME_FORMAT: &str = "%Y%m%dT%H:%M:%SZ";

/// The recursive XML-RPC value tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Double(f64),
    Bool(bool),
    String(String),
    DateTime(DateTime<Utc>),
    Array(Vec<Value>),
    /// Members keep the order they were decoded (or inserted) in.
    Struct(IndexMap<String, Value>),
    Nil,
}

impl Value {
    /// Name of the XML-RPC element that carries this kind of value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::Bool(_) => "boolean",
            Value::String(_) => "string",
            Value::DateTime(_) => "dateTime.iso8601",
            Value::Array(_) => "array",
            Value::Struct(_) => "struct",
            Value::Nil => "nil",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Struct(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up a struct member, `None` for missing keys and non-struct values.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_struct().and_then(|members| members.get(key))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(members: IndexMap<String, Value>) -> Self {
        Value::Struct(members)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Value::Struct(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Parses the timestamp layouts seen on the wire.
///
/// Accepts the compact form with and without the trailing `Z`, the dashed
/// form, and RFC 3339 with an explicit offset. Naive timestamps are taken
/// as UTC.
pub fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = input.strip_suffix('Z').unwrap_or(input);
    for layout in ["%Y%m%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y%m%dT%H%M%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, layout) {
            return Some(dt.and_utc());
        }
    }

    None
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn datetime_layouts() {
        let want = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        for input in [
            "20240102T03:04:05Z",
            "20240102T03:04:05",
            "2024-01-02T03:04:05Z",
            "2024-01-02T03:04:05",
            "2024-01-02T04:04:05+01:00",
            "20240102T030405Z",
            " 20240102T03:04:05Z\n",
        ] {
            assert_eq!(parse_datetime(input), Some(want), "input: {input:?}");
        }

        assert_eq!(parse_datetime("yesterday"), None);
        assert_eq!(parse_datetime(""), None);
    }

    #[test]
    fn datetime_format() {
        let dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_datetime(&dt), "19700101T00:00:00Z");
        assert_eq!(parse_datetime(&format_datetime(&dt)), Some(dt));
    }

    #[test]
    fn struct_from_iter() {
        let value = [("a", 1i64), ("b", 2)].into_iter().collect::<Value>();

        assert_eq!(value.get("a"), Some(&Value::Int(1)));
        assert_eq!(value.get("b"), Some(&Value::Int(2)));
        assert_eq!(value.get("c"), None);
        assert_eq!(Value::Nil.get("a"), None);
    }
}
