//! Recursive-descent parser over the token stream.

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::error::{Error, ErrorCode, Result};
use crate::tokenizer::Tokenizer;
use crate::value::{Pair, Value};

/// Nesting of objects and arrays deeper than this fails the parse instead
/// of risking a stack overflow.
const MAX_DEPTH: usize = 128;

/// Parses the whole buffer into a tree whose containers live in `alloc`
/// and whose strings are decoded in place.
pub(crate) fn parse_document<'a>(buf: &'a mut [u8], alloc: &'a Bump) -> Result<Value<'a>> {
    let mut parser = Parser {
        tok: Tokenizer::new(buf),
        alloc,
        depth: 0,
    };
    let value = parser.parse_value()?;
    parser.tok.skip_space();
    if !parser.tok.at_end() {
        return Err(Error::syntax(
            ErrorCode::TrailingCharacters,
            parser.tok.pos(),
        ));
    }
    Ok(value)
}

struct Parser<'a> {
    tok: Tokenizer<'a>,
    alloc: &'a Bump,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn parse_value(&mut self) -> Result<Value<'a>> {
        self.tok.skip_space();
        match self.tok.peek() {
            None => Err(Error::syntax(
                ErrorCode::EofWhileParsingValue,
                self.tok.pos(),
            )),
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => {
                self.tok.advance(1);
                Ok(Value::Str(self.tok.read_string()?))
            }
            Some(b'0'..=b'9') | Some(b'.') => self.tok.read_number(),
            // A sign may open a number or a signed inf/nan spelling.
            Some(b'-') | Some(b'+') => match self.tok.peek_at(1) {
                Some(b) if b.is_ascii_alphabetic() => self.tok.read_literal(),
                _ => self.tok.read_number(),
            },
            Some(b) if b.is_ascii_alphabetic() => self.tok.read_literal(),
            Some(_) => Err(Error::syntax(ErrorCode::ExpectedSomeValue, self.tok.pos())),
        }
    }

    /// Object production. The comma between pairs is optional, which also
    /// tolerates one before the closing brace.
    fn parse_object(&mut self) -> Result<Value<'a>> {
        self.enter()?;
        self.tok.advance(1); // '{'
        let mut pairs: BumpVec<'a, Pair<'a>> = BumpVec::new_in(self.alloc);
        loop {
            self.tok.skip_space();
            match self.tok.peek() {
                None => {
                    return Err(Error::syntax(
                        ErrorCode::EofWhileParsingObject,
                        self.tok.pos(),
                    ))
                }
                Some(b'}') => {
                    self.tok.advance(1);
                    break;
                }
                Some(b'"') => {
                    self.tok.advance(1);
                    let key = self.tok.read_string()?;
                    self.tok.skip_space();
                    if self.tok.peek() != Some(b':') {
                        return Err(Error::syntax(ErrorCode::ExpectedColon, self.tok.pos()));
                    }
                    self.tok.advance(1);
                    let value = self.parse_value()?;
                    pairs.push((key, value));
                    self.tok.skip_space();
                    if self.tok.peek() == Some(b',') {
                        self.tok.advance(1);
                    }
                }
                Some(_) => {
                    return Err(Error::syntax(
                        ErrorCode::ExpectedObjectKeyOrEnd,
                        self.tok.pos(),
                    ))
                }
            }
        }
        self.leave();
        Ok(Value::Object(pairs))
    }

    fn parse_array(&mut self) -> Result<Value<'a>> {
        self.enter()?;
        self.tok.advance(1); // '['
        let mut elems: BumpVec<'a, Value<'a>> = BumpVec::new_in(self.alloc);
        loop {
            self.tok.skip_space();
            match self.tok.peek() {
                None => {
                    return Err(Error::syntax(
                        ErrorCode::EofWhileParsingArray,
                        self.tok.pos(),
                    ))
                }
                Some(b']') => {
                    self.tok.advance(1);
                    break;
                }
                Some(_) => {
                    elems.push(self.parse_value()?);
                    self.tok.skip_space();
                    if self.tok.peek() == Some(b',') {
                        self.tok.advance(1);
                    }
                }
            }
        }
        self.leave();
        Ok(Value::Array(elems))
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::syntax(
                ErrorCode::RecursionLimitExceeded,
                self.tok.pos(),
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
