//! A typed view of an array value.

use std::ops;
use std::slice;

use ref_cast::RefCast;

use super::node::Value;

/// Array is a view of a [`Value`] that is known to be an array.
///
/// Obtained through [`Value::as_array`]. Derefs to a slice of elements.
#[derive(RefCast)]
#[repr(transparent)]
pub struct Array<'a>(pub(crate) Value<'a>);

impl<'a> Array<'a> {
    fn elements(&self) -> &[Value<'a>] {
        match &self.0 {
            Value::Array(elems) => elems,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Value<'a>> {
        self.elements().iter()
    }
}

impl<'a> ops::Deref for Array<'a> {
    type Target = [Value<'a>];

    fn deref(&self) -> &Self::Target {
        self.elements()
    }
}

impl<'a, 'b> IntoIterator for &'b Array<'a> {
    type Item = &'b Value<'a>;
    type IntoIter = slice::Iter<'b, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for Array<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use bumpalo::Bump;

    use super::*;

    #[test]
    fn view_over_an_array_value() {
        let alloc = Bump::new();
        let mut v = Value::new_array(&alloc);
        v.push(1, &alloc).unwrap();
        v.push(2.5, &alloc).unwrap();

        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0].as_i64_or(-1), 1);
        assert!(arr.iter().all(|v| v.is_numeric()));
    }

    #[test]
    fn non_arrays_have_no_view() {
        assert!(Value::Bool(false).as_array().is_none());
    }
}
