//! Offset ↔ line/column translation
//!
//! Line starts are collected once per source text; lookups binary-search them.

use crate::shared::models::LineColumn;

/// Byte offsets at which each line begins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Number of lines; a trailing newline opens a final empty line.
    /// Empty text has no lines.
    pub fn line_count(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.line_starts.len()
        }
    }

    /// 1-based line/column of `offset`.
    ///
    /// Offsets past the end of the text clamp to (1, 1). The end-of-text
    /// offset itself is a valid position so node end offsets can be converted.
    pub fn line_column(&self, offset: usize) -> LineColumn {
        if offset > self.len {
            return LineColumn::start();
        }
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.line_starts[line];
        LineColumn::new(to_u32(line + 1), to_u32(column + 1))
    }

    /// Byte offset of a 1-based line/column, if it names a character inside the text
    pub fn offset(&self, line: u32, column: u32) -> Option<usize> {
        if line < 1 || column < 1 {
            return None;
        }
        let line_idx = (line - 1) as usize;
        let line_start = *self.line_starts.get(line_idx)?;
        let line_end = self
            .line_starts
            .get(line_idx + 1)
            .copied()
            .unwrap_or(self.len);
        let offset = line_start.checked_add((column - 1) as usize)?;
        (offset < line_end).then_some(offset)
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
