use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::value::format_datetime;
use crate::{Error, Fault, Value};

/// Serializes a `methodCall` document.
pub fn encode_call(method: &str, params: &[Value]) -> Result<Vec<u8>, Error> {
    let mut encoder = Encoder::new();

    encoder.start("methodCall")?;
    encoder.text_element("methodName", method)?;
    encoder.params(params)?;
    encoder.end("methodCall")?;

    Ok(encoder.finish())
}

/// Serializes a successful `methodResponse` carrying a single value.
pub fn encode_response(value: &Value) -> Result<Vec<u8>, Error> {
    let mut encoder = Encoder::new();

    encoder.start("methodResponse")?;
    encoder.params(std::slice::from_ref(value))?;
    encoder.end("methodResponse")?;

    Ok(encoder.finish())
}

/// Serializes a `methodResponse` fault.
pub fn encode_fault(fault: &Fault) -> Result<Vec<u8>, Error> {
    let mut encoder = Encoder::new();

    let value = [
        ("faultCode", Value::Int(fault.code)),
        ("faultString", fault.message.clone()),
    ]
    .into_iter()
    .collect::<Value>();

    encoder.start("methodResponse")?;
    encoder.start("fault")?;
    encoder.value(&value)?;
    encoder.end("fault")?;
    encoder.end("methodResponse")?;

    Ok(encoder.finish())
}

struct Encoder {
    writer: Writer<Vec<u8>>,
    declared: bool,
}

impl Encoder {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::with_capacity(256)),
            declared: false,
        }
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), Error> {
        if !self.declared {
            self.declared = true;
            self.write(Event::Decl(BytesDecl::new("1.0", None, None)))?;
        }

        self.writer
            .write_event(event)
            .map_err(|err| Error::Write(err.to_string()))
    }

    fn start(&mut self, name: &str) -> Result<(), Error> {
        self.write(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> Result<(), Error> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<(), Error> {
        self.start(name)?;
        if !text.is_empty() {
            self.write(Event::Text(BytesText::new(text)))?;
        }
        self.end(name)
    }

    fn params(&mut self, params: &[Value]) -> Result<(), Error> {
        self.start("params")?;
        for param in params {
            self.start("param")?;
            self.value(param)?;
            self.end("param")?;
        }
        self.end("params")
    }

    fn value(&mut self, value: &Value) -> Result<(), Error> {
        self.start("value")?;

        match value {
            Value::Int(i) => self.text_element("int", &i.to_string())?,
            Value::Double(f) => self.text_element("double", &f.to_string())?,
            Value::Bool(b) => self.text_element("boolean", if *b { "1" } else { "0" })?,
            Value::String(s) => self.text_element("string", s)?,
            Value::DateTime(dt) => self.text_element("dateTime.iso8601", &format_datetime(dt))?,
            Value::Array(items) => {
                self.start("array")?;
                self.start("data")?;
                for item in items {
                    self.value(item)?;
                }
                self.end("data")?;
                self.end("array")?;
            }
            Value::Struct(members) => {
                self.start("struct")?;
                for (name, member) in members {
                    self.start("member")?;
                    self.text_element("name", name)?;
                    self.value(member)?;
                    self.end("member")?;
                }
                self.end("struct")?;
            }
            Value::Nil => self.write(Event::Empty(BytesStart::new("nil")))?,
        }

        self.end("value")
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use indexmap::IndexMap;

    use super::*;

    fn encode(params: &[Value]) -> String {
        String::from_utf8(encode_call("m", params).unwrap()).unwrap()
    }

    #[test]
    fn call_envelope() {
        assert_eq!(
            encode(&[Value::from("a")]),
            concat!(
                r#"<?xml version="1.0"?>"#,
                "<methodCall><methodName>m</methodName><params>",
                "<param><value><string>a</string></value></param>",
                "</params></methodCall>",
            )
        );
    }

    #[test]
    fn scalars() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();
        let out = encode(&[
            Value::Int(-7),
            Value::Double(1.5),
            Value::Bool(true),
            Value::Bool(false),
            Value::DateTime(dt),
            Value::Nil,
        ]);

        assert!(out.contains("<value><int>-7</int></value>"));
        assert!(out.contains("<value><double>1.5</double></value>"));
        assert!(out.contains("<value><boolean>1</boolean></value>"));
        assert!(out.contains("<value><boolean>0</boolean></value>"));
        assert!(out.contains("<value><dateTime.iso8601>20231231T23:59:58Z</dateTime.iso8601></value>"));
        assert!(out.contains("<value><nil/></value>"));
    }

    #[test]
    fn escapes_reserved_characters() {
        let out = encode(&[Value::from(r#"<a href="x">&'</a>"#)]);

        assert!(!out.contains("<a href"));
        assert!(out.contains("&lt;a"));
        assert!(out.contains("&amp;"));
    }

    #[test]
    fn empty_containers_keep_their_tags() {
        let out = encode(&[Value::Array(vec![]), Value::Struct(IndexMap::new())]);

        assert!(out.contains("<value><array><data></data></array></value>"));
        assert!(out.contains("<value><struct></struct></value>"));
    }

    #[test]
    fn struct_members_in_order() {
        let value = [("b", Value::Int(1)), ("a", Value::from("x"))]
            .into_iter()
            .collect::<Value>();
        let out = encode(&[value]);

        let b = out.find("<name>b</name>").unwrap();
        let a = out.find("<name>a</name>").unwrap();
        assert!(b < a);
    }

    #[test]
    fn fault_document() {
        let out = encode_fault(&Fault::new(
            1,
            Value::Array(vec!["SESSION_INVALID".into(), "OpaqueRef:x".into()]),
        ))
        .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with(r#"<?xml version="1.0"?><methodResponse><fault><value><struct>"#));
        assert!(out.contains("<member><name>faultCode</name><value><int>1</int></value></member>"));
        assert!(out.ends_with("</struct></value></fault></methodResponse>"));
    }
}
