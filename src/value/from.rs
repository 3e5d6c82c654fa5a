//! Conversions into arena-backed values.

use bumpalo::Bump;

use super::node::Value;

/// Conversion into a [`Value`] whose owned data lives in `alloc`.
///
/// Unlike a plain `From` impl this threads the arena through, because
/// string payloads must be copied into it.
pub trait IntoValue<'a> {
    fn into_value(self, alloc: &'a Bump) -> Value<'a>;
}

impl<'a> IntoValue<'a> for Value<'a> {
    fn into_value(self, _alloc: &'a Bump) -> Value<'a> {
        self
    }
}

impl<'a> IntoValue<'a> for () {
    fn into_value(self, _alloc: &'a Bump) -> Value<'a> {
        Value::Null
    }
}

impl<'a> IntoValue<'a> for bool {
    fn into_value(self, _alloc: &'a Bump) -> Value<'a> {
        Value::Bool(self)
    }
}

macro_rules! impl_into_integer {
    ($($ty:ident),*) => {
        $(
            impl<'a> IntoValue<'a> for $ty {
                fn into_value(self, _alloc: &'a Bump) -> Value<'a> {
                    Value::Int(self as i64)
                }
            }
        )*
    };
}

impl_into_integer!(u8, u16, u32, i8, i16, i32, i64);

impl<'a> IntoValue<'a> for f64 {
    fn into_value(self, _alloc: &'a Bump) -> Value<'a> {
        Value::Double(self)
    }
}

impl<'a> IntoValue<'a> for f32 {
    fn into_value(self, _alloc: &'a Bump) -> Value<'a> {
        Value::Double(self as f64)
    }
}

impl<'a> IntoValue<'a> for &str {
    fn into_value(self, alloc: &'a Bump) -> Value<'a> {
        Value::new_str(self, alloc)
    }
}

impl<'a> IntoValue<'a> for String {
    fn into_value(self, alloc: &'a Bump) -> Value<'a> {
        Value::new_str(&self, alloc)
    }
}
