//! Support for Android `strings.xml` resource files.
//!
//! Only `<string>` elements are read; `<plurals>`, `<string-array>` and other
//! resources are skipped. A value is the inner XML of its element, exactly as
//! written: entity references, CDATA sections and markup such as `<b>` or
//! `<xliff:g>` are kept. Provides parsing, serialization, and conversion
//! to/from [`Dictionary`].

use quick_xml::{
    Reader, Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::{error::Error, traits::Parser, types::Dictionary};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Format {
    pub strings: Vec<StringResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringResource {
    pub name: String,
    pub value: String,
}

impl Parser for Format {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);

        let mut buf = Vec::new();
        let mut strings = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"string" => {
                    let name = parse_name(e)?;
                    let value = parse_string_value(&name, &mut xml_reader)?;
                    strings.push(StringResource { name, value });
                }
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"string" => {
                    strings.push(StringResource {
                        name: parse_name(e)?,
                        value: String::new(),
                    });
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }
        Ok(Format { strings })
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new(&mut writer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        for sr in &self.strings {
            let mut elem = BytesStart::new("string");
            elem.push_attribute(("name", sr.name.as_str()));

            xml_writer.write_event(Event::Text(BytesText::new("    ")))?;
            xml_writer.write_event(Event::Start(elem))?;
            xml_writer.write_event(Event::Text(value_text(&sr.value)))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
            xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        writer.flush()?;
        Ok(())
    }
}

/// Repeated names collapse to the last value.
impl From<Format> for Dictionary {
    fn from(value: Format) -> Self {
        value
            .strings
            .into_iter()
            .map(|sr| (sr.name, sr.value))
            .collect()
    }
}

impl From<&Dictionary> for Format {
    fn from(value: &Dictionary) -> Self {
        Self {
            strings: value
                .iter()
                .map(|(name, value)| StringResource {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

fn parse_name(e: &BytesStart) -> Result<String, Error> {
    let mut name = None;
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::DataMismatch(e.to_string()))?;
        if attr.key.as_ref() == b"name" {
            name = Some(attr.unescape_value()?.to_string());
        }
    }
    name.ok_or_else(|| Error::InvalidResource("string tag missing 'name'".to_string()))
}

/// Reads the raw inner XML up to the `</string>` closing the element just
/// opened. Events are written back unchanged, so escapes and nested markup
/// survive.
fn parse_string_value<R: BufRead>(name: &str, xml_reader: &mut Reader<R>) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut inner = Writer::new(Vec::new());
    let mut depth = 0usize;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::End(_)) if depth == 0 => break,
            Ok(Event::End(e)) => {
                depth -= 1;
                inner.write_event(Event::End(e))?;
            }
            Ok(Event::Start(e)) => {
                depth += 1;
                inner.write_event(Event::Start(e))?;
            }
            Ok(Event::Eof) => {
                return Err(Error::InvalidResource(format!(
                    "unexpected EOF inside string `{}`",
                    name
                )));
            }
            Ok(event) => inner.write_event(event)?,
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }

    String::from_utf8(inner.into_inner())
        .map_err(|e| Error::DataMismatch(format!("string `{}` is not UTF-8: {}", name, e)))
}

/// Content of a `<string>` element for `value`.
///
/// A value that is a well-formed XML fragment is written as is. Anything else
/// (a bare `&`, an unmatched `<`) is plain text and gets escaped.
fn value_text(value: &str) -> BytesText<'_> {
    if is_xml_fragment(value) {
        BytesText::from_escaped(value)
    } else {
        BytesText::from_escaped(partial_escape(value))
    }
}

fn is_xml_fragment(value: &str) -> bool {
    let mut reader = Reader::from_str(value);
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) if depth == 0 => return false,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Text(e)) if e.unescape().is_err() => return false,
            Ok(Event::Decl(_) | Event::DocType(_)) => return false,
            Ok(Event::Eof) => return depth == 0,
            Ok(_) => {}
            Err(_) => return false,
        }
    }
}
