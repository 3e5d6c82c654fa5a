//! The top-level document handle.

use std::fmt;

use bumpalo::Bump;

use crate::error::Result;
use crate::parser::parse_document;
use crate::value::{ser, IntoValue, Value};

/// A JSON document: one root value, one arena, one optional parse error.
///
/// A document starts empty. [`deserialize_in_place`](Document::deserialize_in_place)
/// moves it to the valid state on success or the invalid state on failure;
/// [`set_to_object`](Document::set_to_object) and
/// [`set_to_array`](Document::set_to_array) start a programmatic build and
/// always succeed. An empty or invalid document answers every structural
/// query with a negative result rather than failing.
///
/// The lifetime `'a` ties the document to its arena and, after an in-place
/// parse, to the input buffer; neither may be dropped or touched while the
/// document is alive.
///
/// ```
/// use bumpalo::Bump;
/// use inplace_json::Document;
///
/// let arena = Bump::new();
/// let mut buf = br#"{"x": 1, "y": 2.4}"#.to_vec();
/// let mut doc = Document::new(&arena);
/// doc.deserialize_in_place(&mut buf).unwrap();
/// assert!(doc.is_object());
/// assert_eq!(doc.find_key("y"), Some(1));
/// assert_eq!(doc.get("x").unwrap().as_i64_or(-1), 1);
/// ```
pub struct Document<'a> {
    alloc: &'a Bump,
    root: Option<Value<'a>>,
    error_offset: Option<usize>,
}

impl<'a> Document<'a> {
    /// An empty document backed by `alloc`.
    pub fn new(alloc: &'a Bump) -> Self {
        Document {
            alloc,
            root: None,
            error_offset: None,
        }
    }

    /// Parses `buf` in place, decoding string escapes over the original
    /// bytes. String values of the resulting tree borrow the buffer.
    ///
    /// On failure the byte offset of the first unmatched byte is recorded
    /// (see [`get_error_location`](Document::get_error_location)), any
    /// previous root is discarded, and the buffer may be left partially
    /// decoded.
    ///
    /// The grammar is standard JSON plus case-insensitive `true`/`false`/
    /// `null` and the extended numeric literals `inf`, `infinity` and
    /// `nan` with an optional sign. Commas between elements are optional,
    /// which also tolerates a trailing comma before a closing bracket.
    pub fn deserialize_in_place(&mut self, buf: &'a mut [u8]) -> Result<()> {
        self.root = None;
        match parse_document(buf, self.alloc) {
            Ok(value) => {
                self.root = Some(value);
                self.error_offset = None;
                Ok(())
            }
            Err(err) => {
                self.error_offset = err.offset();
                Err(err)
            }
        }
    }

    /// The byte offset of the last parse failure. Only meaningful right
    /// after a failed [`deserialize_in_place`](Document::deserialize_in_place).
    pub fn get_error_location(&self) -> Option<usize> {
        self.error_offset
    }

    /// Discards the current root and installs an empty object.
    pub fn set_to_object(&mut self) {
        self.root = Some(Value::new_object(self.alloc));
        self.error_offset = None;
    }

    /// Discards the current root and installs an empty array.
    pub fn set_to_array(&mut self) {
        self.root = Some(Value::new_array(self.alloc));
        self.error_offset = None;
    }

    /// The arena backing this document, for building compatible values.
    pub fn allocator(&self) -> &'a Bump {
        self.alloc
    }

    /// Appends a key/value pair to the root object, preserving insertion
    /// order. `key` and any string payload of `value` are copied into the
    /// arena through `alloc`, which is normally
    /// [`allocator()`](Document::allocator).
    ///
    /// Fails with [`Error::NotAnObject`](crate::Error::NotAnObject) when
    /// the root is missing or not an object.
    pub fn add_key_value<V: IntoValue<'a>>(
        &mut self,
        key: &str,
        value: V,
        alloc: &'a Bump,
    ) -> Result<()> {
        match self.root.as_mut() {
            Some(root) => root.add_key_value(key, value, alloc),
            None => Err(crate::Error::NotAnObject),
        }
    }

    /// Appends a value to the root array. The array counterpart of
    /// [`add_key_value`](Document::add_key_value).
    pub fn push_value<V: IntoValue<'a>>(&mut self, value: V, alloc: &'a Bump) -> Result<()> {
        match self.root.as_mut() {
            Some(root) => root.push(value, alloc),
            None => Err(crate::Error::NotAnArray),
        }
    }

    /// The root value, if the document is valid.
    pub fn root(&self) -> Option<&Value<'a>> {
        self.root.as_ref()
    }

    /// Takes the root value out, leaving the document empty.
    pub fn take_root(&mut self) -> Option<Value<'a>> {
        self.root.take()
    }

    pub fn is_object(&self) -> bool {
        self.root.as_ref().map_or(false, Value::is_object)
    }

    pub fn is_array(&self) -> bool {
        self.root.as_ref().map_or(false, Value::is_array)
    }

    pub fn is_null(&self) -> bool {
        self.root.as_ref().map_or(false, Value::is_null)
    }

    /// 0-based position of `key` among the root object's pairs, or `None`
    /// when the key is absent or the document has no object root.
    pub fn find_key(&self, key: &str) -> Option<usize> {
        self.root.as_ref().and_then(|root| root.find_key(key))
    }

    /// The value stored under `key` in the root object. `None` when the
    /// root is missing, not an object, or lacks the key; never fails
    /// loudly.
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.root.as_ref().and_then(|root| root.get_key(key))
    }

    /// The root container's element or pair value at `index`, or `None`
    /// past the end.
    pub fn get_index(&self, index: usize) -> Option<&Value<'a>> {
        self.root.as_ref().and_then(|root| root.get_index(index))
    }

    /// The root container's element or pair value at `index`.
    ///
    /// # Panics
    ///
    /// Panics when the index is out of range or the document has no root.
    /// Out-of-range access is a programmer error; use
    /// [`get_index`](Document::get_index) for a fallible lookup.
    pub fn get_value_at_index(&self, index: usize) -> &Value<'a> {
        match self.root.as_ref() {
            Some(root) => root.get_value_at_index(index),
            None => panic!("document has no root value"),
        }
    }

    /// Appends a rendering of the root into `out`. An empty or invalid
    /// document renders as `null`.
    pub fn serialize(&self, out: &mut Vec<u8>, pretty: bool) -> Result<()> {
        let null = Value::Null;
        let root = self.root.as_ref().unwrap_or(&null);
        if pretty {
            ser::to_writer_pretty(out, root)?;
        } else {
            ser::to_writer(out, root)?;
        }
        Ok(())
    }

    /// The compact rendering of the root, with no inter-token whitespace.
    pub fn to_string(&self) -> Result<String> {
        ser::to_string(self.root.as_ref().unwrap_or(&Value::Null))
    }

    /// The pretty rendering of the root. Re-parses to an equal tree.
    pub fn to_string_pretty(&self) -> Result<String> {
        ser::to_string_pretty(self.root.as_ref().unwrap_or(&Value::Null))
    }
}

impl fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => root.fmt(f),
            None => f.write_str("<no document>"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_a_json_string() {
        let arena = Bump::new();
        let mut buf = br#"
            {
              "x": 1,
              "y": 2,
              "a": [5.0, 6],
              "infinity": Inf,
              "infinity2": inf
            }
        "#
        .to_vec();

        let mut doc = Document::new(&arena);
        doc.deserialize_in_place(&mut buf).unwrap();

        assert!(doc.is_object());

        assert_eq!(doc.find_key("x"), Some(0));
        assert!(doc.get_value_at_index(0).is_numeric());
        assert_eq!(doc.get_value_at_index(0).as_i64_or(-1), 1);
        assert_eq!(doc.find_key("y"), Some(1));
        assert_eq!(doc.find_key("a"), Some(2));

        let v = doc.get_value_at_index(2);
        assert!(v.is_array());

        assert!(doc.get_value_at_index(3).as_f64_or(0.0).is_infinite());
        assert!(doc.get_value_at_index(4).as_f64_or(0.0).is_infinite());
    }

    #[test]
    fn parse_an_array_with_nan() {
        for src in ["[nan]", "[NaN]"] {
            let arena = Bump::new();
            let mut buf = src.as_bytes().to_vec();
            let mut doc = Document::new(&arena);
            doc.deserialize_in_place(&mut buf).unwrap();
            assert!(doc.is_array());
            assert!(doc.get_value_at_index(0).is_double());
            assert!(doc.get_value_at_index(0).as_f64_or(0.0).is_nan());
        }
    }

    #[test]
    fn parse_an_array_with_a_truncated_word() {
        let arena = Bump::new();
        let mut buf = b"[N]".to_vec();
        let mut doc = Document::new(&arena);
        assert!(doc.deserialize_in_place(&mut buf).is_err());
        assert_eq!(doc.get_error_location(), Some(1));
    }

    #[test]
    fn create_a_document() {
        let arena = Bump::new();
        let mut doc = Document::new(&arena);
        doc.set_to_object();
        doc.add_key_value("x", 1, doc.allocator()).unwrap();
        doc.add_key_value("y", 2.4, doc.allocator()).unwrap();

        assert_eq!(doc.find_key("x"), Some(0));
        assert_eq!(doc.find_key("y"), Some(1));
        assert_eq!(doc.find_key("a"), None);

        assert!(doc.get("x").is_some());
        assert!(doc.get("a").is_none());

        assert_eq!(doc.to_string().unwrap(), r#"{"x":1,"y":2.4}"#);
    }

    #[test]
    fn build_an_array_root() {
        let arena = Bump::new();
        let mut doc = Document::new(&arena);
        doc.set_to_array();
        doc.push_value(1, doc.allocator()).unwrap();
        doc.push_value("two", doc.allocator()).unwrap();
        assert_eq!(doc.to_string().unwrap(), r#"[1,"two"]"#);

        // wrong-root mutations are rejected
        assert!(doc.add_key_value("k", 1, doc.allocator()).is_err());
        doc.set_to_object();
        assert!(doc.push_value(1, doc.allocator()).is_err());
    }

    #[test]
    fn a_failed_parse_discards_the_previous_root() {
        let arena = Bump::new();
        let mut good = b"[1]".to_vec();
        let mut bad = b"[1,,]".to_vec();
        let mut doc = Document::new(&arena);
        doc.deserialize_in_place(&mut good).unwrap();
        assert!(doc.is_array());

        assert!(doc.deserialize_in_place(&mut bad).is_err());
        assert!(!doc.is_array());
        assert!(doc.root().is_none());
        assert_eq!(doc.find_key("x"), None);
        assert!(doc.get("x").is_none());
    }

    #[test]
    fn empty_documents_answer_queries_quietly() {
        let arena = Bump::new();
        let doc = Document::new(&arena);
        assert!(!doc.is_object());
        assert!(!doc.is_array());
        assert_eq!(doc.find_key("x"), None);
        assert!(doc.get("x").is_none());
        assert!(doc.get_index(0).is_none());
        assert_eq!(doc.to_string().unwrap(), "null");
    }

    #[test]
    fn scalar_roots_are_valid() {
        let arena = Bump::new();
        let mut buf = b"2.5".to_vec();
        let mut doc = Document::new(&arena);
        doc.deserialize_in_place(&mut buf).unwrap();
        assert!(!doc.is_object());
        assert!(!doc.is_array());
        assert_eq!(doc.root().unwrap().as_f64(), Some(2.5));
    }

    #[test]
    fn serialize_appends_to_the_output() {
        let arena = Bump::new();
        let mut doc = Document::new(&arena);
        doc.set_to_object();
        doc.add_key_value("x", 1, doc.allocator()).unwrap();

        let mut out = b"data: ".to_vec();
        doc.serialize(&mut out, false).unwrap();
        assert_eq!(out, br#"data: {"x":1}"#);
    }

    #[test]
    fn pretty_output_reparses_to_an_equal_tree() {
        let arena = Bump::new();
        let mut buf = br#"{"x":1,"y":2.4,"a":[5.0,6,null,true,"s"]}"#.to_vec();
        let mut doc = Document::new(&arena);
        doc.deserialize_in_place(&mut buf).unwrap();

        let pretty = doc.to_string_pretty().unwrap();
        assert!(pretty.contains('\n'));

        let arena2 = Bump::new();
        let mut buf2 = pretty.into_bytes();
        let mut doc2 = Document::new(&arena2);
        doc2.deserialize_in_place(&mut buf2).unwrap();
        assert_eq!(doc.root().unwrap(), doc2.root().unwrap());
        assert_eq!(doc2.to_string().unwrap(), r#"{"x":1,"y":2.4,"a":[5.0,6,null,true,"s"]}"#);
    }

    #[test]
    fn round_trip_preserves_kinds_and_order() {
        let arena = Bump::new();
        let mut buf =
            br#"{"x": 1, "y": 2, "a": [5.0, 6], "s": "tw\no", "hot": inf, "cold": -Inf}"#.to_vec();
        let mut doc = Document::new(&arena);
        doc.deserialize_in_place(&mut buf).unwrap();
        let text = doc.to_string().unwrap();

        let arena2 = Bump::new();
        let mut buf2 = text.clone().into_bytes();
        let mut doc2 = Document::new(&arena2);
        doc2.deserialize_in_place(&mut buf2).unwrap();

        assert_eq!(doc2.to_string().unwrap(), text);
        for (i, key) in ["x", "y", "a", "s", "hot", "cold"].into_iter().enumerate() {
            assert_eq!(doc2.find_key(key), Some(i));
        }
        assert!(doc2.get_value_at_index(0).is_int());
        assert!(doc2.get("a").unwrap().get_value_at_index(0).is_double());
        assert!(doc2.get("a").unwrap().get_value_at_index(1).is_int());
        assert_eq!(doc2.get("s").unwrap().as_str(), Some("tw\no"));
        assert_eq!(doc2.get("hot").unwrap().as_f64(), Some(f64::INFINITY));
        assert_eq!(doc2.get("cold").unwrap().as_f64(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn nan_round_trips_by_kind() {
        let arena = Bump::new();
        let mut buf = b"[nan]".to_vec();
        let mut doc = Document::new(&arena);
        doc.deserialize_in_place(&mut buf).unwrap();
        let text = doc.to_string().unwrap();
        assert_eq!(text, "[NaN]");

        let arena2 = Bump::new();
        let mut buf2 = text.into_bytes();
        let mut doc2 = Document::new(&arena2);
        doc2.deserialize_in_place(&mut buf2).unwrap();
        assert!(doc2.get_value_at_index(0).as_f64_or(0.0).is_nan());
    }

    #[test]
    fn nested_values_can_be_built_with_the_allocator() {
        let arena = Bump::new();
        let mut doc = Document::new(&arena);
        doc.set_to_object();

        let alloc = doc.allocator();
        let mut list = Value::new_array(alloc);
        list.push(5.0, alloc).unwrap();
        list.push(6, alloc).unwrap();
        doc.add_key_value("a", list, alloc).unwrap();

        assert_eq!(doc.to_string().unwrap(), r#"{"a":[5.0,6]}"#);
    }
}
