//! The tree node type and its accessors.

use std::fmt;

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;
use ref_cast::RefCast;

use super::array::Array;
use super::from::IntoValue;
use super::object::{Object, Pair};
use crate::error::{Error, Result};

/// JsonType is an enum that represents the type of a JSON value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum JsonType {
    Null = 0,
    Boolean = 1,
    Number = 2,
    String = 3,
    Object = 4,
    Array = 5,
}

/// Value is a node in the document tree.
///
/// The lifetime `'a` covers both the arena the node's children live in and
/// the input buffer its string spans may borrow from; both must outlive the
/// value.
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    Str(&'a str),
    Array(BumpVec<'a, Value<'a>>),
    Object(BumpVec<'a, Pair<'a>>),
}

impl<'a> Value<'a> {
    /// An empty object backed by `alloc`.
    pub fn new_object(alloc: &'a Bump) -> Self {
        Value::Object(BumpVec::new_in(alloc))
    }

    /// An empty array backed by `alloc`.
    pub fn new_array(alloc: &'a Bump) -> Self {
        Value::Array(BumpVec::new_in(alloc))
    }

    /// A string value whose text is copied into `alloc`.
    pub fn new_str(text: &str, alloc: &'a Bump) -> Self {
        Value::Str(&*alloc.alloc_str(text))
    }

    /// Gets the type of the value.
    pub fn get_type(&self) -> JsonType {
        match self {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Int(_) | Value::Double(_) => JsonType::Number,
            Value::Str(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// True for both `Int` and `Double` values.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Double(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The integer payload of an `Int` value.
    ///
    /// A `Double` never narrows to an integer here, even when it has no
    /// fractional part.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Soft accessor: the `Int` payload, or `default` for any other type.
    pub fn as_i64_or(&self, default: i64) -> i64 {
        self.as_i64().unwrap_or(default)
    }

    /// The numeric payload as a double. `Int` promotes; `Double` carries
    /// infinities and NaN through unchanged.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Soft accessor: the numeric payload, or `default` for any other type.
    pub fn as_f64_or(&self, default: f64) -> f64 {
        self.as_f64().unwrap_or(default)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// A typed view of an array value.
    pub fn as_array(&self) -> Option<&Array<'a>> {
        if self.is_array() {
            Some(Array::ref_cast(self))
        } else {
            None
        }
    }

    /// A typed view of an object value.
    pub fn as_object(&self) -> Option<&Object<'a>> {
        if self.is_object() {
            Some(Object::ref_cast(self))
        } else {
            None
        }
    }

    /// Number of elements of an array or pairs of an object; 0 for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(elems) => elems.len(),
            Value::Object(pairs) => pairs.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 0-based position of `key` among this object's pairs, in insertion
    /// order. `None` when the key is absent or the value is not an object.
    /// When a key occurs more than once the first occurrence wins.
    pub fn find_key(&self, key: &str) -> Option<usize> {
        match self {
            Value::Object(pairs) => pairs.iter().position(|(k, _)| *k == key),
            _ => None,
        }
    }

    /// The value stored under `key`, first occurrence winning.
    pub fn get_key(&self, key: &str) -> Option<&Value<'a>> {
        match self {
            Value::Object(pairs) => pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// The element or pair value at `index`, or `None` past the end.
    pub fn get_index(&self, index: usize) -> Option<&Value<'a>> {
        match self {
            Value::Array(elems) => elems.get(index),
            Value::Object(pairs) => pairs.get(index).map(|(_, v)| v),
            _ => None,
        }
    }

    /// The element or pair value at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`. Out-of-range access is a programmer
    /// error; use [`get_index`](Value::get_index) for a fallible lookup.
    pub fn get_value_at_index(&self, index: usize) -> &Value<'a> {
        match self.get_index(index) {
            Some(v) => v,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }

    /// Appends a pair to an object value, preserving insertion order. The
    /// key and any string payload of `value` are copied into `alloc`.
    pub fn add_key_value<V: IntoValue<'a>>(
        &mut self,
        key: &str,
        value: V,
        alloc: &'a Bump,
    ) -> Result<()> {
        match self {
            Value::Object(pairs) => {
                let key = &*alloc.alloc_str(key);
                pairs.push((key, value.into_value(alloc)));
                Ok(())
            }
            _ => Err(Error::NotAnObject),
        }
    }

    /// Appends an element to an array value.
    pub fn push<V: IntoValue<'a>>(&mut self, value: V, alloc: &'a Bump) -> Result<()> {
        match self {
            Value::Array(elems) => {
                elems.push(value.into_value(alloc));
                Ok(())
            }
            _ => Err(Error::NotAnArray),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match super::ser::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(e) => write!(f, "<{e}>"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn predicates_and_type_tags() {
        let alloc = Bump::new();
        assert!(Value::Null.is_null());
        assert_eq!(Value::Null.get_type(), JsonType::Null);
        assert!(Value::Bool(true).is_bool());
        assert!(Value::Int(3).is_int());
        assert!(Value::Int(3).is_numeric());
        assert!(!Value::Int(3).is_double());
        assert!(Value::Double(3.0).is_double());
        assert!(Value::Double(3.0).is_numeric());
        assert!(Value::new_str("s", &alloc).is_str());
        assert!(Value::new_array(&alloc).is_array());
        assert!(Value::new_object(&alloc).is_object());
    }

    #[test]
    fn soft_accessors_fall_back_to_defaults() {
        assert_eq!(Value::Int(7).as_i64_or(-1), 7);
        assert_eq!(Value::Double(7.0).as_i64_or(-1), -1);
        assert_eq!(Value::Null.as_i64_or(-1), -1);
        assert_eq!(Value::Bool(true).as_f64_or(0.5), 0.5);
        assert_eq!(Value::Int(2).as_f64_or(0.0), 2.0);
        assert_eq!(Value::Double(2.4).as_f64_or(0.0), 2.4);
    }

    #[test]
    fn find_key_prefers_the_first_duplicate() {
        let alloc = Bump::new();
        let mut obj = Value::new_object(&alloc);
        obj.add_key_value("k", 1, &alloc).unwrap();
        obj.add_key_value("k", 2, &alloc).unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.find_key("k"), Some(0));
        assert_eq!(obj.get_key("k").unwrap().as_i64_or(-1), 1);
    }

    #[test]
    fn index_access() {
        let alloc = Bump::new();
        let mut arr = Value::new_array(&alloc);
        arr.push(10, &alloc).unwrap();
        arr.push("s", &alloc).unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.get_value_at_index(0).as_i64_or(-1), 10);
        assert_eq!(arr.get_value_at_index(1).as_str(), Some("s"));
        assert!(arr.get_index(2).is_none());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn out_of_range_index_is_fatal() {
        let alloc = Bump::new();
        let arr = Value::new_array(&alloc);
        let _ = arr.get_value_at_index(0);
    }

    #[test]
    fn builders_reject_wrong_roots() {
        let alloc = Bump::new();
        let mut arr = Value::new_array(&alloc);
        assert!(matches!(
            arr.add_key_value("k", 1, &alloc),
            Err(Error::NotAnObject)
        ));
        let mut obj = Value::new_object(&alloc);
        assert!(matches!(obj.push(1, &alloc), Err(Error::NotAnArray)));
    }

    #[test]
    fn debug_prints_compact_json() {
        let alloc = Bump::new();
        let mut obj = Value::new_object(&alloc);
        obj.add_key_value("x", 1, &alloc).unwrap();
        assert_eq!(format!("{obj:?}"), r#"{"x":1}"#);
    }
}
