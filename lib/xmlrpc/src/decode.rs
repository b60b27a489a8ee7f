use std::borrow::Cow;

use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::Event;

use crate::value::parse_datetime;
use crate::{Error, Fault, MethodCall, MethodResponse, Value};

/// Parses a `methodResponse` document.
///
/// A response without any `param` yields `Value::Nil`, extra params are
/// ignored.
pub fn decode_response(input: &[u8]) -> Result<MethodResponse, Error> {
    let mut parser = Parser::new(input);

    parser.root("methodResponse")?;
    let response = match parser.significant()? {
        Token::Start { name, empty, .. } if name == "params" => {
            let params = if empty { vec![] } else { parser.params()? };
            MethodResponse::Params(params.into_iter().next().unwrap_or(Value::Nil))
        }
        Token::Start {
            name,
            empty: false,
            offset,
        } if name == "fault" => {
            let value = parser.value()?;
            parser.expect_end("fault")?;

            MethodResponse::Fault(fault_from_value(value, offset)?)
        }
        Token::End { name, offset } if name == "methodResponse" => {
            return Err(Error::Structure {
                reason: "response carries neither params nor fault",
                offset,
            });
        }
        token => return Err(unexpected(token)),
    };
    parser.expect_end("methodResponse")?;
    parser.expect_eof()?;

    Ok(response)
}

/// Parses a `methodCall` document.
pub fn decode_call(input: &[u8]) -> Result<MethodCall, Error> {
    let mut parser = Parser::new(input);

    parser.root("methodCall")?;
    let empty = parser.expect_start("methodName")?;
    let method = parser.text_content("methodName", empty)?.trim().to_string();

    let params = match parser.significant()? {
        Token::Start { name, empty, .. } if name == "params" => {
            let params = if empty { vec![] } else { parser.params()? };
            parser.expect_end("methodCall")?;
            params
        }
        Token::End { name, .. } if name == "methodCall" => vec![],
        token => return Err(unexpected(token)),
    };
    parser.expect_eof()?;

    Ok(MethodCall { method, params })
}

fn fault_from_value(value: Value, offset: u64) -> Result<Fault, Error> {
    let Value::Struct(mut members) = value else {
        return Err(Error::Structure {
            reason: "fault is not a struct",
            offset,
        });
    };

    let code = match members.shift_remove("faultCode") {
        Some(Value::Int(code)) => code,
        Some(Value::String(code)) => code.trim().parse().map_err(|_| Error::InvalidValue {
            kind: "faultCode",
            value: code,
            offset,
        })?,
        _ => {
            return Err(Error::Structure {
                reason: "fault without an integer faultCode",
                offset,
            });
        }
    };
    let message = members
        .shift_remove("faultString")
        .ok_or(Error::Structure {
            reason: "fault without faultString",
            offset,
        })?;

    Ok(Fault { code, message })
}

#[derive(Debug)]
enum Token {
    Start {
        name: String,
        empty: bool,
        offset: u64,
    },
    End {
        name: String,
        offset: u64,
    },
    Text {
        text: String,
        offset: u64,
    },
    Eof {
        offset: u64,
    },
}

fn unexpected(token: Token) -> Error {
    match token {
        Token::Start { name, offset, .. } => Error::UnexpectedElement { name, offset },
        Token::End { name, offset } => Error::UnexpectedElement {
            name: format!("/{name}"),
            offset,
        },
        Token::Text { offset, .. } => Error::Structure {
            reason: "unexpected text content",
            offset,
        },
        Token::Eof { offset } => Error::UnexpectedEof { offset },
    }
}

fn utf8(bytes: &[u8], offset: u64) -> Result<&str, Error> {
    std::str::from_utf8(bytes).map_err(|err| Error::Xml {
        offset,
        reason: err.to_string(),
    })
}

fn resolve_entity(name: &str) -> Option<Cow<'static, str>> {
    let resolved = match name {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "apos" => "'",
        "quot" => "\"",
        _ => {
            let code = match name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => name.strip_prefix('#')?.parse().ok()?,
            };

            return char::from_u32(code).map(|c| Cow::Owned(c.to_string()));
        }
    };

    Some(Cow::Borrowed(resolved))
}

struct Parser<'a> {
    reader: Reader<&'a [u8]>,
    pending: Option<Token>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            reader: Reader::from_reader(input),
            pending: None,
        }
    }

    fn offset(&self) -> u64 {
        self.reader.buffer_position() as u64
    }

    /// Reads the next token, merging adjacent text, entity references and
    /// CDATA sections into a single `Text`.
    fn next(&mut self) -> Result<Token, Error> {
        if let Some(token) = self.pending.take() {
            return Ok(token);
        }

        let mut text: Option<(String, u64)> = None;
        loop {
            let offset = self.offset();
            let event = self.reader.read_event().map_err(|err| Error::Xml {
                offset: self.reader.error_position() as u64,
                reason: err.to_string(),
            })?;

            let token = match event {
                Event::Text(e) => {
                    let raw = e.into_inner();
                    let raw = utf8(&raw, offset)?;
                    let unescaped = unescape(raw).map_err(|err| Error::Xml {
                        offset,
                        reason: err.to_string(),
                    })?;

                    text.get_or_insert_with(|| (String::new(), offset))
                        .0
                        .push_str(&unescaped);
                    continue;
                }
                Event::GeneralRef(e) => {
                    let name = utf8(&e, offset)?;
                    let resolved = resolve_entity(name).ok_or_else(|| Error::Xml {
                        offset,
                        reason: format!("unknown entity &{name};"),
                    })?;

                    text.get_or_insert_with(|| (String::new(), offset))
                        .0
                        .push_str(&resolved);
                    continue;
                }
                Event::CData(e) => {
                    let raw = e.into_inner();
                    text.get_or_insert_with(|| (String::new(), offset))
                        .0
                        .push_str(utf8(&raw, offset)?);
                    continue;
                }
                Event::Start(e) => Token::Start {
                    name: utf8(e.name().as_ref(), offset)?.to_string(),
                    empty: false,
                    offset,
                },
                Event::Empty(e) => Token::Start {
                    name: utf8(e.name().as_ref(), offset)?.to_string(),
                    empty: true,
                    offset,
                },
                Event::End(e) => Token::End {
                    name: utf8(e.name().as_ref(), offset)?.to_string(),
                    offset,
                },
                Event::Eof => Token::Eof { offset },
                // declarations, comments and processing instructions
                _ => continue,
            };

            return match text.take() {
                Some((text, offset)) => {
                    self.pending = Some(token);
                    Ok(Token::Text { text, offset })
                }
                None => Ok(token),
            };
        }
    }

    /// Like `next` but skips whitespace-only text.
    fn significant(&mut self) -> Result<Token, Error> {
        loop {
            match self.next()? {
                Token::Text { text, .. } if text.trim().is_empty() => continue,
                token => return Ok(token),
            }
        }
    }

    fn root(&mut self, expected: &str) -> Result<(), Error> {
        match self.significant()? {
            Token::Start {
                name,
                empty: false,
                ..
            } if name == expected => Ok(()),
            token => Err(unexpected(token)),
        }
    }

    /// Consumes `<expected>` and reports whether it was self-closing.
    fn expect_start(&mut self, expected: &str) -> Result<bool, Error> {
        match self.significant()? {
            Token::Start { name, empty, .. } if name == expected => Ok(empty),
            token => Err(unexpected(token)),
        }
    }

    fn expect_end(&mut self, expected: &str) -> Result<(), Error> {
        match self.significant()? {
            Token::End { name, .. } if name == expected => Ok(()),
            Token::Eof { offset } => Err(Error::UnexpectedEof { offset }),
            token => {
                let offset = match token {
                    Token::Start { offset, .. }
                    | Token::End { offset, .. }
                    | Token::Text { offset, .. }
                    | Token::Eof { offset } => offset,
                };

                Err(Error::UnclosedElement {
                    name: expected.to_string(),
                    offset,
                })
            }
        }
    }

    fn expect_eof(&mut self) -> Result<(), Error> {
        match self.significant()? {
            Token::Eof { .. } => Ok(()),
            token => Err(unexpected(token)),
        }
    }

    fn text_content(&mut self, element: &str, empty: bool) -> Result<String, Error> {
        if empty {
            return Ok(String::new());
        }

        match self.next()? {
            Token::Text { text, .. } => {
                self.expect_end(element)?;
                Ok(text)
            }
            Token::End { name, .. } if name == element => Ok(String::new()),
            token => Err(unexpected(token)),
        }
    }

    /// Parses `<param>` elements up to and including `</params>`.
    fn params(&mut self) -> Result<Vec<Value>, Error> {
        let mut params = vec![];

        loop {
            match self.significant()? {
                Token::Start {
                    name,
                    empty: false,
                    ..
                } if name == "param" => {
                    params.push(self.value()?);
                    self.expect_end("param")?;
                }
                Token::End { name, .. } if name == "params" => return Ok(params),
                token => return Err(unexpected(token)),
            }
        }
    }

    /// Parses a complete `<value>` element.
    fn value(&mut self) -> Result<Value, Error> {
        if self.expect_start("value")? {
            return Ok(Value::String(String::new()));
        }

        self.value_body()
    }

    /// Parses what follows an opening `<value>`, including `</value>`.
    fn value_body(&mut self) -> Result<Value, Error> {
        match self.next()? {
            Token::Text { text, .. } => match self.significant()? {
                // untyped values are strings
                Token::End { name, .. } if name == "value" => Ok(Value::String(text)),
                Token::Start {
                    name,
                    empty,
                    offset,
                } if text.trim().is_empty() => {
                    let value = self.typed(name, empty, offset)?;
                    self.expect_end("value")?;
                    Ok(value)
                }
                token => Err(unexpected(token)),
            },
            Token::End { name, .. } if name == "value" => Ok(Value::String(String::new())),
            Token::Start {
                name,
                empty,
                offset,
            } => {
                let value = self.typed(name, empty, offset)?;
                self.expect_end("value")?;
                Ok(value)
            }
            token => Err(unexpected(token)),
        }
    }

    fn typed(&mut self, name: String, empty: bool, offset: u64) -> Result<Value, Error> {
        let value = match name.as_str() {
            "int" | "i4" | "i8" => {
                let text = self.text_content(&name, empty)?;
                let value = text.trim().parse().map_err(|_| Error::InvalidValue {
                    kind: "int",
                    value: text.clone(),
                    offset,
                })?;

                Value::Int(value)
            }
            "double" => {
                let text = self.text_content(&name, empty)?;
                let value = text.trim().parse().map_err(|_| Error::InvalidValue {
                    kind: "double",
                    value: text.clone(),
                    offset,
                })?;

                Value::Double(value)
            }
            "boolean" => {
                let text = self.text_content(&name, empty)?;
                match text.trim() {
                    "1" | "true" => Value::Bool(true),
                    "0" | "false" => Value::Bool(false),
                    _ => {
                        return Err(Error::InvalidValue {
                            kind: "boolean",
                            value: text,
                            offset,
                        });
                    }
                }
            }
            "string" => Value::String(self.text_content(&name, empty)?),
            "dateTime.iso8601" => {
                let text = self.text_content(&name, empty)?;
                match parse_datetime(&text) {
                    Some(dt) => Value::DateTime(dt),
                    None => {
                        return Err(Error::InvalidValue {
                            kind: "dateTime.iso8601",
                            value: text,
                            offset,
                        });
                    }
                }
            }
            "nil" => {
                if !empty {
                    self.expect_end("nil")?;
                }

                Value::Nil
            }
            "array" => self.array(empty)?,
            "struct" => self.structure(empty)?,
            _ => return Err(Error::UnexpectedElement { name, offset }),
        };

        Ok(value)
    }

    fn array(&mut self, empty: bool) -> Result<Value, Error> {
        let mut items = vec![];
        if empty {
            return Ok(Value::Array(items));
        }

        match self.significant()? {
            Token::Start { name, empty, .. } if name == "data" => {
                if !empty {
                    loop {
                        match self.significant()? {
                            Token::Start { name, empty, .. } if name == "value" => {
                                if empty {
                                    items.push(Value::String(String::new()));
                                } else {
                                    items.push(self.value_body()?);
                                }
                            }
                            Token::End { name, .. } if name == "data" => break,
                            token => return Err(unexpected(token)),
                        }
                    }
                }

                self.expect_end("array")?;
            }
            // tolerate a missing <data> wrapper on empty arrays
            Token::End { name, .. } if name == "array" => {}
            token => return Err(unexpected(token)),
        }

        Ok(Value::Array(items))
    }

    fn structure(&mut self, empty: bool) -> Result<Value, Error> {
        let mut members = IndexMap::new();
        if empty {
            return Ok(Value::Struct(members));
        }

        loop {
            match self.significant()? {
                Token::Start {
                    name,
                    empty: false,
                    ..
                } if name == "member" => {
                    let empty = self.expect_start("name")?;
                    let key = self.text_content("name", empty)?;
                    let value = self.value()?;
                    self.expect_end("member")?;

                    members.insert(key, value);
                }
                Token::End { name, .. } if name == "struct" => break,
                token => return Err(unexpected(token)),
            }
        }

        Ok(Value::Struct(members))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{encode_call, encode_fault, encode_response};

    fn params(body: &str) -> Value {
        let doc = format!(
            "<?xml version=\"1.0\"?>\n<methodResponse>\n  <params>\n    <param>\n      {body}\n    </param>\n  </params>\n</methodResponse>\n"
        );

        match decode_response(doc.as_bytes()).unwrap() {
            MethodResponse::Params(value) => value,
            MethodResponse::Fault(fault) => panic!("unexpected fault {fault:?}"),
        }
    }

    #[test]
    fn scalars() {
        for (body, want) in [
            ("<value><int>42</int></value>", Value::Int(42)),
            ("<value><i4>-1</i4></value>", Value::Int(-1)),
            (
                "<value><i8>4611686018427387904</i8></value>",
                Value::Int(1 << 62),
            ),
            ("<value><int> 7 </int></value>", Value::Int(7)),
            ("<value><double>2.5</double></value>", Value::Double(2.5)),
            ("<value><boolean>1</boolean></value>", Value::Bool(true)),
            ("<value><boolean>false</boolean></value>", Value::Bool(false)),
            ("<value><string>abc</string></value>", Value::from("abc")),
            ("<value><string/></value>", Value::from("")),
            ("<value><string></string></value>", Value::from("")),
            ("<value>untyped</value>", Value::from("untyped")),
            ("<value></value>", Value::from("")),
            ("<value/>", Value::from("")),
            ("<value>  </value>", Value::from("  ")),
            ("<value><nil/></value>", Value::Nil),
            (
                "<value><dateTime.iso8601>20240102T03:04:05Z</dateTime.iso8601></value>",
                Value::DateTime(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            ),
            (
                "<value><dateTime.iso8601>20240102T03:04:05</dateTime.iso8601></value>",
                Value::DateTime(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            ),
        ] {
            assert_eq!(params(body), want, "body: {body}");
        }
    }

    #[test]
    fn entities_and_cdata() {
        assert_eq!(
            params("<value><string>a &lt;b&gt; &amp; &quot;c&quot; &apos;d&apos; &#65;&#x42;</string></value>"),
            Value::from(r#"a <b> & "c" 'd' AB"#)
        );
        assert_eq!(
            params("<value><string><![CDATA[<raw>]]></string></value>"),
            Value::from("<raw>")
        );
    }

    #[test]
    fn compounds() {
        let value = params(
            r#"<value><struct>
                <member><name>uuid</name><value>u-1</value></member>
                <member>
                    <name>refs</name>
                    <value><array><data>
                        <value>OpaqueRef:1</value>
                        <value><string>OpaqueRef:2</string></value>
                    </data></array></value>
                </member>
                <member><name>empty</name><value><array><data/></array></value></member>
                <member><name>nested</name><value><struct></struct></value></member>
            </struct></value>"#,
        );

        let want = [
            ("uuid", Value::from("u-1")),
            (
                "refs",
                Value::Array(vec!["OpaqueRef:1".into(), "OpaqueRef:2".into()]),
            ),
            ("empty", Value::Array(vec![])),
            ("nested", Value::Struct(IndexMap::new())),
        ]
        .into_iter()
        .collect::<Value>();

        assert_eq!(value, want);
    }

    #[test]
    fn no_params_is_nil() {
        let doc = "<methodResponse><params/></methodResponse>";
        assert!(matches!(
            decode_response(doc.as_bytes()).unwrap(),
            MethodResponse::Params(Value::Nil)
        ));

        let doc = "<methodResponse><params></params></methodResponse>";
        assert!(matches!(
            decode_response(doc.as_bytes()).unwrap(),
            MethodResponse::Params(Value::Nil)
        ));
    }

    #[test]
    fn fault() {
        let doc = r#"<?xml version="1.0"?>
<methodResponse>
  <fault>
    <value>
      <struct>
        <member><name>faultCode</name><value><int>4</int></value></member>
        <member><name>faultString</name><value><string>[HOST_NAME_INVALID, myhost]</string></value></member>
      </struct>
    </value>
  </fault>
</methodResponse>"#;

        let MethodResponse::Fault(fault) = decode_response(doc.as_bytes()).unwrap() else {
            panic!("fault expected");
        };
        assert_eq!(fault.code, 4);
        assert_eq!(fault.message, Value::from("[HOST_NAME_INVALID, myhost]"));
    }

    #[test]
    fn unknown_element_reports_offset() {
        let doc = "<methodResponse><params><param><value><base64>AA==</base64></value></param></params></methodResponse>";
        match decode_response(doc.as_bytes()).unwrap_err() {
            Error::UnexpectedElement { name, offset } => {
                assert_eq!(name, "base64");
                assert_eq!(offset, doc.find("<base64>").unwrap() as u64);
            }
            err => panic!("unexpected error {err:?}"),
        }

        let doc = "<html><body>502 Bad Gateway</body></html>";
        match decode_response(doc.as_bytes()).unwrap_err() {
            Error::UnexpectedElement { name, offset } => {
                assert_eq!(name, "html");
                assert_eq!(offset, 0);
            }
            err => panic!("unexpected error {err:?}"),
        }
    }

    #[test]
    fn malformed() {
        for doc in [
            "",
            "<methodResponse>",
            "<methodResponse><params><param><value><int>1</int></value></param>",
            "<methodResponse></methodResponse>",
            "<methodResponse><params><param><value><int>x</int></value></param></params></methodResponse>",
            "<methodResponse><params><param><value><boolean>2</boolean></value></param></params></methodResponse>",
            "<methodResponse><params><param><value><int>1</i4></value></param></params></methodResponse>",
            "<methodResponse><fault><value><string>oops</string></value></fault></methodResponse>",
            "<methodResponse><params/></methodResponse>trailing<x/>",
        ] {
            assert!(decode_response(doc.as_bytes()).is_err(), "doc: {doc:?}");
        }
    }

    #[test]
    fn call_round_trip() {
        let params = vec![
            Value::from("OpaqueRef:abc"),
            Value::Int(i64::MIN),
            Value::Array(vec![Value::Array(vec!["k".into(), "v".into()])]),
            Value::Struct(IndexMap::new()),
            Value::from("<&>\"'"),
            Value::from(""),
            Value::Nil,
        ];

        let doc = encode_call("host.get_record", &params).unwrap();
        let call = decode_call(&doc).unwrap();

        assert_eq!(call.method, "host.get_record");
        assert_eq!(call.params, params);
    }

    #[test]
    fn call_without_params() {
        let call = decode_call(b"<methodCall><methodName>pool.get_all</methodName></methodCall>")
            .unwrap();

        assert_eq!(call.method, "pool.get_all");
        assert!(call.params.is_empty());
    }

    #[test]
    fn response_round_trip() {
        let value = [("Status", Value::from("Success")), ("Value", Value::Int(3))]
            .into_iter()
            .collect::<Value>();

        let doc = encode_response(&value).unwrap();
        assert!(matches!(
            decode_response(&doc).unwrap(),
            MethodResponse::Params(got) if got == value
        ));

        let fault = Fault::new(7, Value::Array(vec!["SESSION_INVALID".into()]));
        let doc = encode_fault(&fault).unwrap();
        assert!(matches!(
            decode_response(&doc).unwrap(),
            MethodResponse::Fault(got) if got == fault
        ));
    }
}
