//! A typed view of an object value.

use std::slice;

use ref_cast::RefCast;

use super::node::Value;

/// One key/value pair of an object, in insertion order.
pub type Pair<'a> = (&'a str, Value<'a>);

/// Object is a view of a [`Value`] that is known to be an object.
///
/// Obtained through [`Value::as_object`]; the wrapper only adds pair-shaped
/// accessors on top of the underlying node.
#[derive(RefCast)]
#[repr(transparent)]
pub struct Object<'a>(pub(crate) Value<'a>);

impl<'a> Object<'a> {
    fn pairs(&self) -> &[Pair<'a>] {
        match &self.0 {
            Value::Object(pairs) => pairs,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.pairs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// The value stored under `key`. When a key occurs more than once the
    /// first occurrence wins.
    pub fn get(&self, key: &str) -> Option<&Value<'a>> {
        self.0.get_key(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Pair<'a>> {
        self.pairs().iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Object<'a> {
    type Item = &'b Pair<'a>;
    type IntoIter = slice::Iter<'b, Pair<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for Object<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
