//! When parsing, building or serializing a document goes wrong.

use std::io;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the engine can report.
///
/// Parse failures carry the byte offset at which the first unmatched byte
/// began; the same offset is also recorded on the document and available
/// through [`Document::get_error_location`](crate::Document::get_error_location).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Input that is not syntactically valid JSON.
    #[error("{code} at offset {offset}")]
    Syntax { code: ErrorCode, offset: usize },

    /// A key/value pair was appended to a document whose root is not an object.
    #[error("document root is not an object")]
    NotAnObject,

    /// A value was pushed onto a document whose root is not an array.
    #[error("document root is not an array")]
    NotAnArray,

    /// Some I/O error occurred while serializing.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, offset: usize) -> Self {
        Error::Syntax { code, offset }
    }

    /// The byte offset of a syntax error, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Syntax { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Returns true if this error was caused by input that was not
    /// syntactically valid JSON.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }
}

/// Categorizes a syntax failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorCode {
    /// EOF while a value was still expected.
    #[error("unexpected end of input")]
    EofWhileParsingValue,

    /// EOF while parsing a string.
    #[error("unexpected end of input while parsing a string")]
    EofWhileParsingString,

    /// EOF while parsing an object.
    #[error("unexpected end of input while parsing an object")]
    EofWhileParsingObject,

    /// EOF while parsing an array.
    #[error("unexpected end of input while parsing an array")]
    EofWhileParsingArray,

    /// Expected this character to be a `':'`.
    #[error("expected `:`")]
    ExpectedColon,

    /// Expected this character to start an object key or close the object.
    #[error("expected string key or `}}`")]
    ExpectedObjectKeyOrEnd,

    /// Expected this character to start a JSON value.
    #[error("expected value")]
    ExpectedSomeValue,

    /// A word that is none of `true`, `false`, `null` or one of the
    /// extended `inf`/`infinity`/`nan` spellings.
    #[error("invalid literal")]
    InvalidLiteral,

    /// Invalid number, such as `-` or `1.2.3`.
    #[error("invalid number")]
    InvalidNumber,

    /// Invalid escape sequence.
    #[error("invalid escape")]
    InvalidEscape,

    /// A `\uXXXX` escape encoding half of a surrogate pair without its mate.
    #[error("lone surrogate in hex escape")]
    LoneSurrogate,

    /// A `\uXXXX` escape that does not form a valid code point.
    #[error("invalid unicode code point")]
    InvalidUnicodeCodePoint,

    /// Control character found while parsing a string.
    #[error("control character (\\u0000-\\u001F) found while parsing a string")]
    ControlCharacterWhileParsingString,

    /// A decoded string is not valid UTF-8.
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,

    /// Non-whitespace trailing characters after the root value.
    #[error("trailing characters")]
    TrailingCharacters,

    /// Nesting of objects and arrays more than 128 layers deep.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}
