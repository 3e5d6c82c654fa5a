//! Rendering a value tree back to JSON text, and serde interop.

use std::io;

use serde::ser::{SerializeMap, SerializeSeq};

use super::node::Value;
use crate::error::Result;
use crate::format::{CompactFormatter, Formatter, PrettyFormatter};

/// Serialize the value as compact JSON into the given writer.
pub fn to_writer<W>(writer: &mut W, value: &Value) -> io::Result<()>
where
    W: ?Sized + io::Write,
{
    write_value(writer, &mut CompactFormatter, value)
}

/// Serialize the value as pretty-printed JSON into the given writer.
pub fn to_writer_pretty<W>(writer: &mut W, value: &Value) -> io::Result<()>
where
    W: ?Sized + io::Write,
{
    write_value(writer, &mut PrettyFormatter::new(), value)
}

/// Serialize the value as a compact JSON string.
pub fn to_string(value: &Value) -> Result<String> {
    let mut out = Vec::with_capacity(128);
    to_writer(&mut out, value)?;
    into_string(out)
}

/// Serialize the value as a pretty-printed JSON string.
pub fn to_string_pretty(value: &Value) -> Result<String> {
    let mut out = Vec::with_capacity(128);
    to_writer_pretty(&mut out, value)?;
    into_string(out)
}

fn into_string(out: Vec<u8>) -> Result<String> {
    // The formatter only emits valid UTF-8.
    Ok(String::from_utf8(out)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?)
}

/// Walks the tree, driving the formatter. Recursion depth is bounded by
/// the parser's nesting limit for parsed trees and by the builder's call
/// depth for programmatic ones.
pub(crate) fn write_value<W, F>(writer: &mut W, fmt: &mut F, value: &Value) -> io::Result<()>
where
    W: ?Sized + io::Write,
    F: Formatter,
{
    match value {
        Value::Null => fmt.write_null(writer),
        Value::Bool(b) => fmt.write_bool(writer, *b),
        Value::Int(i) => fmt.write_i64(writer, *i),
        Value::Double(d) => fmt.write_f64(writer, *d),
        Value::Str(s) => fmt.write_string(writer, s),
        Value::Array(elems) => {
            fmt.begin_array(writer)?;
            for (i, elem) in elems.iter().enumerate() {
                fmt.begin_array_value(writer, i == 0)?;
                write_value(writer, fmt, elem)?;
                fmt.end_array_value(writer)?;
            }
            fmt.end_array(writer)
        }
        Value::Object(pairs) => {
            fmt.begin_object(writer)?;
            for (i, (key, val)) in pairs.iter().enumerate() {
                fmt.begin_object_key(writer, i == 0)?;
                fmt.write_string(writer, key)?;
                fmt.end_object_key(writer)?;
                fmt.begin_object_value(writer)?;
                write_value(writer, fmt, val)?;
                fmt.end_object_value(writer)?;
            }
            fmt.end_object(writer)
        }
    }
}

impl serde::Serialize for Value<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(elems) => {
                let mut seq = serializer.serialize_seq(Some(elems.len()))?;
                for elem in elems.iter() {
                    seq.serialize_element(elem)?;
                }
                seq.end()
            }
            Value::Object(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (key, val) in pairs.iter() {
                    map.serialize_entry(key, val)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use bumpalo::Bump;

    use super::*;

    fn sample<'a>(alloc: &'a Bump) -> Value<'a> {
        let mut obj = Value::new_object(alloc);
        obj.add_key_value("x", 1, alloc).unwrap();
        obj.add_key_value("y", 2.4, alloc).unwrap();
        let mut arr = Value::new_array(alloc);
        arr.push("a", alloc).unwrap();
        arr.push(Value::Null, alloc).unwrap();
        obj.add_key_value("list", arr, alloc).unwrap();
        obj
    }

    #[test]
    fn compact_has_no_whitespace() {
        let alloc = Bump::new();
        let obj = sample(&alloc);
        assert_eq!(to_string(&obj).unwrap(), r#"{"x":1,"y":2.4,"list":["a",null]}"#);
    }

    #[test]
    fn pretty_is_indented() {
        let alloc = Bump::new();
        let mut obj = Value::new_object(&alloc);
        obj.add_key_value("x", 1, &alloc).unwrap();
        let expected = "{\n  \"x\": 1\n}";
        assert_eq!(to_string_pretty(&obj).unwrap(), expected);
    }

    #[test]
    fn empty_containers() {
        let alloc = Bump::new();
        assert_eq!(to_string(&Value::new_object(&alloc)).unwrap(), "{}");
        assert_eq!(to_string(&Value::new_array(&alloc)).unwrap(), "[]");
        assert_eq!(to_string_pretty(&Value::new_array(&alloc)).unwrap(), "[]");
    }

    #[test]
    fn serde_output_matches_our_own() {
        let alloc = Bump::new();
        let obj = sample(&alloc);
        let ours: serde_json::Value = serde_json::from_str(&to_string(&obj).unwrap()).unwrap();
        let theirs = serde_json::to_value(&obj).unwrap();
        assert_eq!(ours, theirs);
    }
}
