//! A dynamic type representing any valid JSON value.

pub mod array;
mod from;
pub(crate) mod node;
pub mod object;
mod partial_eq;
pub(crate) mod ser;

#[doc(inline)]
pub use self::array::Array;
pub use self::from::IntoValue;
pub use self::node::{JsonType, Value};
#[doc(inline)]
pub use self::object::{Object, Pair};
pub use self::ser::{to_string, to_string_pretty, to_writer, to_writer_pretty};
