//! Source location types
//!
//! These types represent positions in source code.

use serde::{Deserialize, Serialize};

use crate::errors::{CodegraphError, Result};

/// Single 1-based line/column position in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineColumn {
    pub line: u32,
    pub column: u32,
}

impl LineColumn {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// First position of any text: (1, 1)
    pub fn start() -> Self {
        Self::new(1, 1)
    }
}

impl Default for LineColumn {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for LineColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open byte range `[start_offset, end_offset)` in the originating text,
/// optionally annotated with line/column positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start_offset: usize,
    pub end_offset: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<LineColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<LineColumn>,
}

impl SourceLocation {
    /// Create a location from offsets.
    ///
    /// Fails with `InvalidArgument` when `end_offset < start_offset`.
    pub fn new(start_offset: usize, end_offset: usize) -> Result<Self> {
        if end_offset < start_offset {
            return Err(CodegraphError::invalid_argument(format!(
                "location end {} precedes start {}",
                end_offset, start_offset
            )));
        }
        Ok(Self {
            start_offset,
            end_offset,
            start: None,
            end: None,
        })
    }

    /// Attach line/column annotations
    pub fn with_line_columns(mut self, start: LineColumn, end: LineColumn) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Half-open containment: `start <= position < end`.
    ///
    /// A zero-width location contains nothing.
    pub fn contains(&self, position: usize) -> bool {
        self.start_offset <= position && position < self.end_offset
    }

    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }

    pub fn start_line(&self) -> Option<u32> {
        self.start.map(|p| p.line)
    }

    pub fn start_column(&self) -> Option<u32> {
        self.start.map(|p| p.column)
    }

    pub fn end_line(&self) -> Option<u32> {
        self.end.map(|p| p.line)
    }

    pub fn end_column(&self) -> Option<u32> {
        self.end.map(|p| p.column)
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) => write!(f, "{}-{}", start, end),
            _ => write!(f, "[{}, {})", self.start_offset, self.end_offset),
        }
    }
}
