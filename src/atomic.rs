/// Trait for atomic elements that can be used in parsing
/// This enables generic error formatting and position calculation
pub trait Atomic: Copy + Clone + PartialEq + std::fmt::Debug {
    /// Whether this element ends a line, for line-number reporting
    fn is_newline(&self) -> bool;

    /// Convert a slice of elements to a displayable string for error reporting
    fn format_slice(slice: &[Self]) -> String;
}

impl Atomic for u8 {
    fn is_newline(&self) -> bool {
        *self == b'\n'
    }

    fn format_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}

impl Atomic for char {
    fn is_newline(&self) -> bool {
        *self == '\n'
    }

    fn format_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}
