use crate::atomic::Atomic;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Human-readable error position: line number plus element offset in that line
#[derive(Debug)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A location in the source input where a parse failed
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'src, T: Atomic = u8> {
    source: &'src [T],
    /// The position in `source` where the parser gave up
    loc: usize,
}

impl<'src, T: Atomic> CodeLoc<'src, T> {
    pub fn new(source: &'src [T], loc: usize) -> Self {
        Self { source, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Calculate line number and element offset within that line
    ///
    /// Note: this reports element offset rather than column number, since
    /// column calculation depends on encoding, tab rendering, and terminal
    /// width. Element offset within the line is unambiguous.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, element) in self.source.iter().enumerate() {
            if i >= self.loc {
                break;
            }
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let mut lines = Vec::new();
        let mut current_line = 1;
        let mut line_start = 0;

        let text = T::format_slice(self.source);

        let emit = |line_no: usize, content: &str, lines: &mut Vec<String>| {
            if line_no < pos.line.saturating_sub(2) || line_no > pos.line + 2 {
                return;
            }
            let prefix = if line_no == pos.line {
                format!("  > {} | ", line_no)
            } else {
                format!("    {} | ", line_no)
            };
            lines.push(format!("{}{}", prefix, content));

            if line_no == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        };

        for (i, ch) in text.char_indices() {
            if ch == '\n' {
                let content = text[line_start..i].to_string();
                emit(current_line, &content, &mut lines);
                current_line += 1;
                line_start = i + 1;
            }
        }

        // Last line when there is no trailing newline
        if line_start < text.len() {
            let content = text[line_start..].to_string();
            emit(current_line, &content, &mut lines);
        }

        lines
    }
}

/// Error type produced by the built-in primitive parsers
///
/// Carries enough of the source to render the failing line with a pointer.
/// Combinator chains that want a different failure representation swap it in
/// with [`map_err`](crate::map_err::MapErrExt::map_err).
#[derive(Debug)]
pub enum SeqcombError<'src, T: Atomic = u8> {
    /// The input ended before the expected term could be matched
    UnexpectedEndOfInput(CodeLoc<'src, T>),
    /// The input at the cursor did not match what the parser expected
    SyntaxError {
        message: Cow<'static, str>,
        loc: CodeLoc<'src, T>,
    },
}

impl<'src, T: Atomic> SeqcombError<'src, T> {
    /// Returns the position where this error occurred
    pub fn position(&self) -> usize {
        match self {
            SeqcombError::UnexpectedEndOfInput(loc) => loc.position(),
            SeqcombError::SyntaxError { loc, .. } => loc.position(),
        }
    }

    /// Returns the location of this error in the source
    pub fn loc(&self) -> CodeLoc<'src, T> {
        match self {
            SeqcombError::UnexpectedEndOfInput(loc) => *loc,
            SeqcombError::SyntaxError { loc, .. } => *loc,
        }
    }
}

impl<'src, T: Atomic> fmt::Display for SeqcombError<'src, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqcombError::UnexpectedEndOfInput(loc) => {
                let pos = loc.readable_position();
                writeln!(
                    f,
                    "Unexpected end of input at line {}, byte offset {} (absolute position: {})",
                    pos.line, pos.byte_offset, loc.loc
                )?;
                writeln!(f)?;
                for line in loc.context_lines() {
                    writeln!(f, "{}", line)?;
                }
                Ok(())
            }
            SeqcombError::SyntaxError { message, loc } => {
                let pos = loc.readable_position();
                writeln!(
                    f,
                    "Syntax error at line {}, byte offset {}: {}",
                    pos.line, pos.byte_offset, message
                )?;
                writeln!(f)?;
                for line in loc.context_lines() {
                    writeln!(f, "{}", line)?;
                }
                Ok(())
            }
        }
    }
}

impl<'src, T: Atomic> Error for SeqcombError<'src, T> {}
