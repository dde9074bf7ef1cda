//! Syntax tree
//!
//! Owns the node arena and the exact source text that produced it, and
//! answers position, line/column and type queries over the finished parse.

use tracing::debug;

use super::ast_node::{eq_ignore_case, AstArena, AstNode, Descendants, NodeId, PreOrder};
use super::diagnostics::{Severity, SyntaxError};
use super::line_index::LineIndex;
use super::metrics::SyntaxTreeMetrics;
use super::visitor::SexpWriter;
use crate::errors::{CodegraphError, Result};
use crate::features::parsing::ports::TreeConverter;
use crate::shared::constants::messages::SYNTAX_ERROR;
use crate::shared::models::LineColumn;

/// Read-only, queryable result of one parse
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    arena: AstArena,
    root: NodeId,
    source_text: String,
    file_path: Option<String>,
    language: String,
    errors: Vec<SyntaxError>,
    line_index: LineIndex,
}

impl SyntaxTree {
    /// Wrap a finished arena.
    ///
    /// `root` must exist in `arena` and must not have a parent. Error
    /// diagnostics are collected here, once.
    pub fn new(
        arena: AstArena,
        root: NodeId,
        source_text: impl Into<String>,
        file_path: Option<String>,
        language: impl Into<String>,
    ) -> Result<Self> {
        let root_node = arena.node(root).ok_or_else(|| {
            CodegraphError::invalid_argument(format!("root {} does not exist", root))
        })?;
        if !root_node.is_root() {
            return Err(CodegraphError::invalid_argument(format!(
                "root {} has a parent",
                root
            )));
        }

        let errors = collect_errors(root_node, file_path.as_deref());
        let source_text = source_text.into();
        let line_index = LineIndex::new(&source_text);
        let language = language.into();

        debug!(
            "Built {} syntax tree: {} nodes, {} errors",
            language,
            arena.len(),
            errors.len()
        );

        Ok(Self {
            arena,
            root,
            source_text,
            file_path,
            language,
            errors,
            line_index,
        })
    }

    pub fn root(&self) -> AstNode<'_> {
        self.node(self.root)
            .unwrap_or_else(|| unreachable!("root validated at construction"))
    }

    pub fn node(&self, id: NodeId) -> Option<AstNode<'_>> {
        self.arena.node(id)
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Diagnostics for every error-flagged node, fixed at construction
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// True when the source is blank
    pub fn is_empty(&self) -> bool {
        self.source_text.trim().is_empty()
    }

    /// Deepest node whose location contains `offset`.
    ///
    /// `None` when the offset lies outside the text or the root's location
    /// does not contain it. Nodes without a location are skipped; among
    /// overlapping siblings the first in document order wins.
    pub fn node_at_position(&self, offset: usize) -> Option<AstNode<'_>> {
        if offset >= self.source_text.len() {
            return None;
        }

        let mut current = self.root();
        if !current.location().is_some_and(|l| l.contains(offset)) {
            return None;
        }

        'descend: loop {
            for child in current.children() {
                if child.location().is_some_and(|l| l.contains(offset)) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }

    /// Deepest node at a 1-based line/column
    pub fn node_at_location(&self, line: u32, column: u32) -> Option<AstNode<'_>> {
        let offset = self.line_index.offset(line, column)?;
        self.node_at_position(offset)
    }

    /// 1-based line/column of `offset`; out-of-range offsets clamp to (1, 1)
    pub fn line_column_from_position(&self, offset: usize) -> LineColumn {
        self.line_index.line_column(offset)
    }

    /// Root followed by all descendants, pre-order
    pub fn all_nodes(&self) -> impl Iterator<Item = AstNode<'_>> {
        PreOrder::from_node(self.root()).map(|(node, _)| node)
    }

    /// Descendants of the root, pre-order
    pub fn descendants(&self) -> Descendants<'_> {
        self.root().descendants()
    }

    /// Nodes whose type matches case-insensitively, pre-order
    pub fn nodes_by_type<'a>(&'a self, node_type: &'a str) -> impl Iterator<Item = AstNode<'a>> {
        self.all_nodes()
            .filter(move |n| eq_ignore_case(n.node_type(), node_type))
    }

    /// Zero-width nodes inserted by error recovery
    pub fn missing_nodes(&self) -> impl Iterator<Item = AstNode<'_>> {
        self.all_nodes().filter(|n| n.is_missing())
    }

    /// Source slice covered by `node`.
    ///
    /// Empty when the node has no location, the range is empty or inverted,
    /// runs past the text, or does not fall on UTF-8 boundaries.
    pub fn node_text(&self, node: AstNode<'_>) -> &str {
        let Some(loc) = node.location() else {
            return "";
        };
        if loc.end_offset <= loc.start_offset || loc.end_offset > self.source_text.len() {
            return "";
        }
        self.source_text
            .get(loc.start_offset..loc.end_offset)
            .unwrap_or("")
    }

    /// Single pre-order pass collecting counts and depth
    pub fn metrics(&self) -> SyntaxTreeMetrics {
        let mut metrics = SyntaxTreeMetrics {
            error_count: self.errors.len(),
            source_length: self.source_text.len(),
            line_count: self.line_count(),
            ..Default::default()
        };

        for (node, depth) in PreOrder::from_node(self.root()) {
            metrics.total_nodes += 1;
            metrics.max_depth = metrics.max_depth.max(depth);
            if node.is_missing() {
                metrics.missing_count += 1;
            }
            metrics.record_type(node.node_type());
        }

        metrics
    }

    /// S-expression dump of the whole tree
    pub fn to_sexp(&self) -> String {
        SexpWriter::render(self.root())
    }

    /// Hand the tree to a downstream converter
    pub fn convert_with<C: TreeConverter>(&self, converter: &C) -> Result<C::Output> {
        converter.convert(self)
    }
}

fn collect_errors(root: AstNode<'_>, file_path: Option<&str>) -> Vec<SyntaxError> {
    PreOrder::from_node(root)
        .map(|(node, _)| node)
        .filter(|node| node.is_error())
        .map(|node| SyntaxError {
            message: SYNTAX_ERROR.to_string(),
            severity: Severity::Error,
            location: node.location().copied(),
            file_path: file_path.map(str::to_string),
        })
        .collect()
}
