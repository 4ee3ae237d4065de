use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers, choosing the second with the
/// first's value
///
/// This is monadic bind: "parse A, then, using A's value, decide how to parse
/// B". The binder runs only after the first parser succeeds, and the parser it
/// returns starts from the advanced cursor. A failure of the first parser is
/// propagated untouched and the binder is never invoked.
pub struct Then<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Then<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Then { parser, binder }
    }
}

impl<'src, P, F, P2> Parser<'src> for Then<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'src, Element = P::Element, Error = P::Error>,
{
    type Element = P::Element;
    type Output = P2::Output;
    type Error = P::Error;

    fn parse(
        &self,
        cursor: Cursor<'src, Self::Element>,
    ) -> Result<Outcome<'src, Self::Element, Self::Output>, Self::Error> {
        let (cursor, value) = self.parser.parse(cursor)?.into_parts();
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create a Then parser
pub fn then<'src, P, F, P2>(parser: P, binder: F) -> Then<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'src, Element = P::Element, Error = P::Error>,
{
    Then::new(parser, binder)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'src>: Parser<'src> + Sized {
    fn then<F, P2>(self, binder: F) -> Then<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'src, Element = Self::Element, Error = Self::Error>,
    {
        Then::new(self, binder)
    }
}

/// Implement ThenExt for all parsers
impl<'src, P> ThenExt<'src> for P where P: Parser<'src> {}
