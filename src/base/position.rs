//! Position tracking for AST nodes
//!
//! Stores the source location (line/column) of AST nodes so that
//! resolution failures can point back at the declaration that caused them.

use std::fmt;

use smol_str::SmolStr;

/// A span representing a range in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Where a declaration lives: the unit's path and, when the parser
/// recorded one, the span of the declaration.
///
/// Displays as `path` or `path:line:col` with 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub path: SmolStr,
    pub span: Option<Span>,
}

impl Location {
    pub fn new(path: impl Into<SmolStr>, span: Option<Span>) -> Self {
        Self {
            path: path.into(),
            span,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(
                f,
                "{}:{}:{}",
                self.path,
                span.start.line + 1,
                span.start.column + 1
            ),
            None => f.write_str(&self.path),
        }
    }
}
