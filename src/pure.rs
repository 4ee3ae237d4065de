use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::outcome::Outcome;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value and consumes no input
///
/// The identity element for `then`/`amap` chains. The element and error types
/// are phantom, so a `pure` slots into any chain and picks them up from its
/// neighbours.
pub struct Pure<T, V, E> {
    value: V,
    _phantom: PhantomData<(T, E)>,
}

impl<T, V, E> Pure<T, V, E> {
    pub fn new(value: V) -> Self {
        Pure {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<'src, T, V, E> Parser<'src> for Pure<T, V, E>
where
    T: Atomic,
    V: Clone,
{
    type Element = T;
    type Output = V;
    type Error = E;

    fn parse(
        &self,
        cursor: Cursor<'src, T>,
    ) -> Result<Outcome<'src, T, Self::Output>, Self::Error> {
        Ok(Outcome::new(cursor, self.value.clone()))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T, V, E>(value: V) -> Pure<T, V, E>
where
    T: Atomic,
    V: Clone,
{
    Pure::new(value)
}
