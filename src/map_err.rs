use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::fmt;

/// Parser combinator that transforms the error of a parser using a mapping function
///
/// This is how a caller substitutes its own failure type into a chain; the
/// new error type carries no trait bound, so an opaque unit failure is as
/// valid as a structured one.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'src, P, F, E2> Parser<'src> for MapErr<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Error) -> E2,
{
    type Element = P::Element;
    type Output = P::Output;
    type Error = E2;

    fn parse(
        &self,
        cursor: Cursor<'src, Self::Element>,
    ) -> Result<Outcome<'src, Self::Element, Self::Output>, Self::Error> {
        self.parser.parse(cursor).map_err(&self.mapper)
    }
}

/// Convenience function to create a MapErr parser
pub fn map_err<'src, P, F, E2>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Error) -> E2,
{
    MapErr::new(parser, mapper)
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'src>: Parser<'src> + Sized {
    fn map_err<F, E2>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> E2,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'src, P> MapErrExt<'src> for P where P: Parser<'src> {}
