use crate::atomic::Atomic;

/// An immutable snapshot of "remaining input + position"
///
/// A cursor keeps the full source slice and an index into it, so the position
/// always equals `source.len() - remaining.len()`. Advancing produces a new
/// cursor; the receiver is never mutated. Because cursors are `Copy`, a caller
/// can hold on to any earlier position and resume from it independently.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'src, T: Atomic = u8> {
    source: &'src [T],
    position: usize,
}

/// Cursor over raw byte input, the common case for text parsing
pub type ByteCursor<'src> = Cursor<'src, u8>;

impl<'src, T: Atomic> Cursor<'src, T> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'src [T]) -> Self {
        Cursor {
            source,
            position: 0,
        }
    }

    /// The unconsumed suffix of the input
    pub fn remaining(&self) -> &'src [T] {
        &self.source[self.position..]
    }

    /// Absolute offset of the cursor within the source
    pub fn position(&self) -> usize {
        self.position
    }

    /// The full source slice, regardless of how far the cursor has advanced
    pub fn source(&self) -> &'src [T] {
        self.source
    }

    /// Return a new cursor advanced by `n` elements
    ///
    /// `n` must not exceed `remaining().len()`; parsers only advance by
    /// amounts they have already matched.
    pub fn advance(self, n: usize) -> Self {
        debug_assert!(self.position + n <= self.source.len());
        Cursor {
            source: self.source,
            position: (self.position + n).min(self.source.len()),
        }
    }

    /// Check if the cursor has consumed all input
    pub fn at_end(&self) -> bool {
        self.position >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_zero() {
        let cursor = ByteCursor::new(b"hello\nworld");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.remaining(), b"hello\nworld");
        assert!(!cursor.at_end());
    }

    #[test]
    fn test_advance() {
        let cursor = ByteCursor::new(b"hello");
        let cursor = cursor.advance(2);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), b"llo");
    }

    #[test]
    fn test_advance_to_end() {
        let cursor = ByteCursor::new(b"ab");
        let cursor = cursor.advance(2);
        assert!(cursor.at_end());
        assert_eq!(cursor.remaining(), b"");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_advance_zero_is_identity() {
        let cursor = ByteCursor::new(b"abc");
        assert_eq!(cursor.advance(0), cursor);
    }

    #[test]
    fn test_position_invariant() {
        let data = b"foofoo";
        let mut cursor = ByteCursor::new(data);
        for step in 0..=data.len() {
            assert_eq!(cursor.position(), data.len() - cursor.remaining().len());
            if step < data.len() {
                cursor = cursor.advance(1);
            }
        }
    }

    #[test]
    fn test_empty_data() {
        let cursor = ByteCursor::new(b"");
        assert!(cursor.at_end());
        assert_eq!(cursor.remaining(), b"");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_copy_independence() {
        let cursor = ByteCursor::new(b"abcd");

        let saved_at_a = cursor;
        let cursor = cursor.advance(1);
        assert_eq!(cursor.remaining(), b"bcd");

        // Saved copy is unaffected
        assert_eq!(saved_at_a.remaining(), b"abcd");

        let saved_at_b = cursor;
        let cursor = cursor.advance(2);
        assert_eq!(cursor.remaining(), b"d");

        // Both saved positions remain valid starting points
        assert_eq!(saved_at_a.advance(1).remaining(), b"bcd");
        assert_eq!(saved_at_b.advance(1).remaining(), b"cd");
    }

    #[test]
    fn test_char_elements() {
        let data: Vec<char> = "näë".chars().collect();
        let cursor: Cursor<'_, char> = Cursor::new(&data);
        let cursor = cursor.advance(1);
        assert_eq!(cursor.remaining(), &['ä', 'ë']);
        assert_eq!(cursor.position(), 1);
    }
}
