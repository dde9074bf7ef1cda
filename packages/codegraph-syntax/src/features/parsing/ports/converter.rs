//! Downstream conversion port

use crate::errors::Result;
use crate::features::parsing::domain::SyntaxTree;

/// Turns a syntax tree into a higher-level model (e.g. a compilation unit).
///
/// Implementations only need the root, children, node types, locations and
/// `SyntaxTree::node_text`.
pub trait TreeConverter {
    type Output;

    fn convert(&self, tree: &SyntaxTree) -> Result<Self::Output>;
}
