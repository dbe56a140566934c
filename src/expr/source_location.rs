//! Source positions for error reporting
//!
//! Lexemes and errors carry byte offsets; these helpers turn an offset into a
//! 1-based line/column pair and render the surrounding line with a caret.

use std::fmt::{self, Write};

/// A position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    /// Byte offset from start of input
    pub offset: usize,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, counted in chars)
    pub column: usize,
}

impl SourcePosition {
    /// Position at the start of input
    #[inline]
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Calculate position from a byte offset in `input`
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());

        let mut line = 1;
        let mut column = 1;
        for (index, ch) in input.char_indices() {
            if index >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

/// Renders source lines with a position marker
pub struct SourceFormatter;

impl SourceFormatter {
    /// Format the line holding `offset`, `context_lines` lines around it,
    /// and a caret under the offset
    pub fn format_line(input: &str, offset: usize, context_lines: usize) -> String {
        let offset = offset.min(input.len());
        let mut output = String::new();

        let mut lines: Vec<(usize, usize)> = Vec::new();
        let mut line_start = 0;
        for (index, ch) in input.char_indices() {
            if ch == '\n' {
                lines.push((line_start, index));
                line_start = index + 1;
            }
        }
        lines.push((line_start, input.len()));

        let current = lines
            .iter()
            .position(|&(start, end)| offset >= start && offset <= end)
            .unwrap_or(0);
        let first = current.saturating_sub(context_lines);
        let last = (current + context_lines + 1).min(lines.len());

        for (index, &(start, end)) in lines.iter().enumerate().take(last).skip(first) {
            let _ = writeln!(output, "{:4} | {}", index + 1, &input[start..end]);
            if index == current {
                let column = input[start..offset].chars().count();
                let _ = writeln!(output, "     | {}^", " ".repeat(column));
            }
        }

        output
    }
}
