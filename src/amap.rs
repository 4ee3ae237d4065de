use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;

/// Parser combinator that applies a parsed function to a parsed value
///
/// Applicative apply: the receiver runs first, then the function-producing
/// parser runs on the resulting cursor, and the function it yields is applied
/// to the receiver's value. Consumption order is fixed left to right; neither
/// parser depends on the other's value, only on its consumption.
pub struct AMap<P, PF> {
    parser: P,
    mapper: PF,
}

impl<P, PF> AMap<P, PF> {
    pub fn new(parser: P, mapper: PF) -> Self {
        AMap { parser, mapper }
    }
}

impl<'src, P, PF, U> Parser<'src> for AMap<P, PF>
where
    P: Parser<'src>,
    PF: Parser<'src, Element = P::Element, Error = P::Error>,
    PF::Output: FnOnce(P::Output) -> U,
{
    type Element = P::Element;
    type Output = U;
    type Error = P::Error;

    fn parse(
        &self,
        cursor: Cursor<'src, Self::Element>,
    ) -> Result<Outcome<'src, Self::Element, Self::Output>, Self::Error> {
        let (cursor, value) = self.parser.parse(cursor)?.into_parts();
        let outcome = self.mapper.parse(cursor)?;
        Ok(outcome.map(|function| function(value)))
    }
}

/// Convenience function to create an AMap parser
pub fn amap<'src, P, PF, U>(parser: P, mapper: PF) -> AMap<P, PF>
where
    P: Parser<'src>,
    PF: Parser<'src, Element = P::Element, Error = P::Error>,
    PF::Output: FnOnce(P::Output) -> U,
{
    AMap::new(parser, mapper)
}

/// Extension trait to add .amap() method support for parsers
pub trait AMapExt<'src>: Parser<'src> + Sized {
    fn amap<PF, U>(self, mapper: PF) -> AMap<Self, PF>
    where
        PF: Parser<'src, Element = Self::Element, Error = Self::Error>,
        PF::Output: FnOnce(Self::Output) -> U,
    {
        AMap::new(self, mapper)
    }
}

/// Implement AMapExt for all parsers
impl<'src, P> AMapExt<'src> for P where P: Parser<'src> {}
