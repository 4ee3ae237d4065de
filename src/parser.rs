use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::outcome::Outcome;

/// Core parser trait for parser combinators
///
/// A parser is a pure value: `parse` must not mutate the parser or the cursor,
/// and calling it twice with the same cursor yields the same result. The error
/// type is chosen per parser, not crate-wide, and carries no trait bound so
/// opaque unit-like failures are expressible; use
/// [`map_err`](crate::map_err::MapErrExt::map_err) to substitute a caller's
/// own failure type into a chain.
pub trait Parser<'src>: Sized {
    /// The element type of the input sequence this parser consumes
    type Element: Atomic;

    /// The value produced on a successful parse
    type Output;

    /// The failure value produced when the parse cannot proceed
    type Error;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns an [`Outcome`] pairing the parsed value with the advanced
    /// cursor on success. Failures must not consume input: the caller's
    /// cursor is untouched and can be reused.
    fn parse(
        &self,
        cursor: Cursor<'src, Self::Element>,
    ) -> Result<Outcome<'src, Self::Element, Self::Output>, Self::Error>;
}
