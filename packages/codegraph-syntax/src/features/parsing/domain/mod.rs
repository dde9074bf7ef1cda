//! Parsing domain models

mod ast_node;
mod diagnostics;
mod line_index;
mod metrics;
mod syntax_tree;
mod visitor;

pub use ast_node::{AstArena, AstNode, Descendants, NodeData, NodeId, PreOrder};
pub use diagnostics::{Severity, SyntaxError};
pub use line_index::LineIndex;
pub use metrics::SyntaxTreeMetrics;
pub use syntax_tree::SyntaxTree;
pub use visitor::{AstVisitor, SexpWriter};
