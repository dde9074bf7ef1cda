//! Tree-sitter tree → AST arena conversion
//!
//! Walks the concrete tree with an explicit stack (deeply nested sources must
//! not overflow the thread stack) and copies the nodes selected by
//! [`BuildOptions`] into an [`AstArena`]. Error and missing nodes are always
//! kept.

use tree_sitter::{Node as TSNode, Point, Tree};

use crate::config::ParserConfig;
use crate::errors::Result;
use crate::features::parsing::domain::{AstArena, NodeData, NodeId};
use crate::features::parsing::ports::{LanguagePlugin, ParsedAst};
use crate::shared::constants::tree_builder::{
    ANONYMOUS_METADATA_KEY, FIELD_METADATA_KEY, INITIAL_NODE_CAPACITY,
};
use crate::shared::models::{LineColumn, SourceLocation};

/// Node selection and payload flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    pub include_anonymous_nodes: bool,
    pub include_extras: bool,
    pub capture_leaf_text: bool,
    pub record_field_names: bool,
}

impl From<&ParserConfig> for BuildOptions {
    fn from(config: &ParserConfig) -> Self {
        Self {
            include_anonymous_nodes: config.include_anonymous_nodes,
            include_extras: config.include_extras,
            capture_leaf_text: config.capture_leaf_text,
            record_field_names: config.record_field_names,
        }
    }
}

pub struct AstBuilder<'s, P: LanguagePlugin + ?Sized> {
    plugin: &'s P,
    source: &'s str,
    options: BuildOptions,
}

impl<'s, P: LanguagePlugin + ?Sized> AstBuilder<'s, P> {
    pub fn new(plugin: &'s P, source: &'s str, options: BuildOptions) -> Self {
        Self {
            plugin,
            source,
            options,
        }
    }

    pub fn build(&self, tree: &Tree) -> Result<ParsedAst> {
        let ts_root = tree.root_node();
        let mut arena = AstArena::with_capacity(INITIAL_NODE_CAPACITY);
        let root = arena.alloc(self.node_data(&ts_root, None)?);

        let mut stack: Vec<(TSNode<'_>, NodeId)> = vec![(ts_root, root)];
        let mut kept = Vec::new();

        while let Some((ts_node, parent)) = stack.pop() {
            let mut cursor = ts_node.walk();
            if cursor.goto_first_child() {
                loop {
                    let child = cursor.node();
                    if self.keep(&child) {
                        let id = arena.alloc(self.node_data(&child, cursor.field_name())?);
                        arena.add_child(parent, id)?;
                        kept.push((child, id));
                    }
                    if !cursor.goto_next_sibling() {
                        break;
                    }
                }
            }
            // reversed so the first child is expanded first
            stack.extend(kept.drain(..).rev());
        }

        Ok(ParsedAst { arena, root })
    }

    fn keep(&self, node: &TSNode<'_>) -> bool {
        if node.is_error() || node.is_missing() {
            return true;
        }
        (node.is_named() || self.options.include_anonymous_nodes)
            && (!node.is_extra() || self.options.include_extras)
    }

    fn node_data(&self, node: &TSNode<'_>, field: Option<&str>) -> Result<NodeData> {
        let location = SourceLocation::new(node.start_byte(), node.end_byte())?
            .with_line_columns(line_column(node.start_position()), line_column(node.end_position()));

        let mut data = NodeData::new(node.kind())
            .with_location(location)
            .with_error(node.is_error())
            .with_missing(node.is_missing());

        if let Some(name) = self.plugin.node_name(node, self.source) {
            data = data.with_name(name);
        }
        if self.options.capture_leaf_text && node.child_count() == 0 && !node.is_missing() {
            if let Some(text) = self.source.get(node.byte_range()) {
                data = data.with_text(text);
            }
        }
        if self.options.record_field_names {
            if let Some(field) = field {
                data = data.with_metadata(FIELD_METADATA_KEY, field);
            }
        }
        if !node.is_named() {
            data = data.with_metadata(ANONYMOUS_METADATA_KEY, true);
        }
        Ok(data)
    }
}

fn line_column(point: Point) -> LineColumn {
    let line = u32::try_from(point.row + 1).unwrap_or(u32::MAX);
    let column = u32::try_from(point.column + 1).unwrap_or(u32::MAX);
    LineColumn::new(line, column)
}
