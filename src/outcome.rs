use crate::atomic::Atomic;
use crate::cursor::Cursor;

/// A successful parse: the produced value plus the cursor after consuming it
///
/// Outcomes are produced only on success; failures travel through the error
/// channel of [`Parser::parse`](crate::parser::Parser::parse) and never carry
/// a cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Outcome<'src, T: Atomic, V> {
    cursor: Cursor<'src, T>,
    value: V,
}

impl<'src, T: Atomic, V> Outcome<'src, T, V> {
    pub fn new(cursor: Cursor<'src, T>, value: V) -> Self {
        Outcome { cursor, value }
    }

    /// The cursor positioned after the consumed input
    pub fn cursor(&self) -> Cursor<'src, T> {
        self.cursor
    }

    /// The parsed value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Transform the value, keeping the cursor where it is
    pub fn map<B, F>(self, mapper: F) -> Outcome<'src, T, B>
    where
        F: FnOnce(V) -> B,
    {
        Outcome {
            cursor: self.cursor,
            value: mapper(self.value),
        }
    }

    /// Split the outcome into its cursor and value, handing both to the caller
    pub fn into_parts(self) -> (Cursor<'src, T>, V) {
        (self.cursor, self.value)
    }
}
