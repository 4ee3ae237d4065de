use crate::cursor::ByteCursor;
use crate::error::{CodeLoc, SeqcombError};
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches an exact UTF-8 string at the cursor position
///
/// This is the primitive that actually reads raw input; everything else in
/// the crate is built by composing it (or [`pure`](crate::pure::pure)). On a
/// match it advances past the term and yields the term itself; on a mismatch
/// it fails without consuming anything.
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'src> Parser<'src> for IsStringParser {
    type Element = u8;
    type Output = Cow<'static, str>;
    type Error = SeqcombError<'src>;

    fn parse(
        &self,
        cursor: ByteCursor<'src>,
    ) -> Result<Outcome<'src, u8, Self::Output>, Self::Error> {
        let expected = self.expected.as_bytes();
        let remaining = cursor.remaining();

        if remaining.len() < expected.len() {
            return Err(SeqcombError::UnexpectedEndOfInput(CodeLoc::new(
                cursor.source(),
                cursor.position() + remaining.len(),
            )));
        }

        if !remaining.starts_with(expected) {
            // First diverging byte, for the error pointer
            let offset = remaining
                .iter()
                .zip(expected)
                .position(|(a, b)| a != b)
                .unwrap_or(0);
            return Err(SeqcombError::SyntaxError {
                message: format!("expected '{}'", self.expected).into(),
                loc: CodeLoc::new(cursor.source(), cursor.position() + offset),
            });
        }

        Ok(Outcome::new(
            cursor.advance(expected.len()),
            self.expected.clone(),
        ))
    }
}

/// Convenience function to create a literal string parser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}
