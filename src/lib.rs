//! An in-place JSON document engine with an arena-backed DOM.
//!
//! The engine parses a mutable text buffer in place into an indexed,
//! queryable tree, lets callers build or mutate documents
//! programmatically, and serializes the tree back to compact or pretty
//! JSON text.
//!
//! String escapes are decoded over the original bytes of the input
//! buffer, so string values of a parsed tree borrow the caller's buffer
//! instead of copying it. Everything created programmatically lives in a
//! [`bumpalo::Bump`] arena owned by the caller; dropping the arena frees
//! the whole tree at once.
//!
//! The accepted grammar is standard JSON plus case-insensitive extended
//! numeric literals: `inf`, `+inf`, `infinity` and `-inf` parse to the
//! infinities and `nan`/`NaN` to NaN, anywhere a number is accepted. The
//! serializer renders them as `inf`, `-inf` and `NaN`, so such documents
//! round-trip.
//!
//! # Parsing and querying
//!
//! ```
//! use bumpalo::Bump;
//! use inplace_json::Document;
//!
//! let arena = Bump::new();
//! let mut buf = br#"{"x": 1, "y": 2, "a": [5.0, 6]}"#.to_vec();
//!
//! let mut doc = Document::new(&arena);
//! doc.deserialize_in_place(&mut buf).unwrap();
//!
//! assert!(doc.is_object());
//! assert_eq!(doc.find_key("a"), Some(2));
//! assert!(doc.get_value_at_index(2).is_array());
//! assert_eq!(doc.get("x").unwrap().as_i64_or(-1), 1);
//! ```
//!
//! # Building and serializing
//!
//! ```
//! use bumpalo::Bump;
//! use inplace_json::Document;
//!
//! let arena = Bump::new();
//! let mut doc = Document::new(&arena);
//! doc.set_to_object();
//! doc.add_key_value("x", 1, doc.allocator()).unwrap();
//! doc.add_key_value("y", 2.4, doc.allocator()).unwrap();
//!
//! assert_eq!(doc.to_string().unwrap(), r#"{"x":1,"y":2.4}"#);
//! ```

mod document;
mod error;
mod parser;
mod tokenizer;

pub mod format;
pub mod value;

pub use crate::document::Document;
pub use crate::error::{Error, ErrorCode, Result};
pub use crate::format::{CompactFormatter, Formatter, PrettyFormatter};
pub use crate::value::{
    to_string, to_string_pretty, to_writer, to_writer_pretty, Array, IntoValue, JsonType, Object,
    Pair, Value,
};
