//! Language-neutral AST nodes
//!
//! Nodes live in an [`AstArena`] and are addressed by [`NodeId`]. The arena owns
//! every node; a node's `children` list is the ownership hierarchy and `parent`
//! is a plain index back-reference used for upward traversal only.
//!
//! Engines build trees through the arena's mutating methods. Once an arena is
//! moved into a `SyntaxTree` it is only reachable through shared [`AstNode`]
//! views, so the tree can no longer change.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;
use serde_json::Value;

use super::visitor::AstVisitor;
use crate::errors::{CodegraphError, Result};
use crate::shared::models::SourceLocation;

/// Opaque node identity inside one arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in allocation order
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload of one syntactic construct
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    node_type: String,
    name: Option<String>,
    location: Option<SourceLocation>,
    text: Option<String>,
    is_error: bool,
    is_missing: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    metadata: FxHashMap<String, Value>,
}

impl NodeData {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            name: None,
            location: None,
            text: None,
            is_error: false,
            is_missing: false,
            parent: None,
            children: Vec::new(),
            metadata: FxHashMap::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn with_missing(mut self, is_missing: bool) -> Self {
        self.is_missing = is_missing;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn is_missing(&self) -> bool {
        self.is_missing
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn metadata(&self) -> &FxHashMap<String, Value> {
        &self.metadata
    }
}

/// Owning storage for every node of one tree
#[derive(Debug, Clone, Default)]
pub struct AstArena {
    nodes: Vec<NodeData>,
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Allocate a detached node.
    ///
    /// Structural links carried over from a cloned `NodeData` are dropped.
    pub fn alloc(&mut self, mut data: NodeData) -> NodeId {
        data.parent = None;
        data.children.clear();
        let id = NodeId(self.nodes.len());
        self.nodes.push(data);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    /// Read-only view of a node
    pub fn node(&self, id: NodeId) -> Option<AstNode<'_>> {
        self.get(id).map(|data| AstNode {
            arena: self,
            id,
            data,
        })
    }

    /// Append `child` to `parent`'s children and point `child` back at `parent`.
    ///
    /// Fails with `InvalidArgument` when either id is unknown, when `child`
    /// already has a parent, or when attaching would create a cycle.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.contains(parent) {
            return Err(CodegraphError::invalid_argument(format!(
                "parent {} does not exist",
                parent
            )));
        }
        let child_parent = self
            .get(child)
            .ok_or_else(|| {
                CodegraphError::invalid_argument(format!("child {} does not exist", child))
            })?
            .parent;
        if let Some(existing) = child_parent {
            return Err(CodegraphError::invalid_argument(format!(
                "child {} is already attached to {}",
                child, existing
            )));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(CodegraphError::invalid_argument(format!(
                "attaching {} under {} would create a cycle",
                child, parent
            )));
        }

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// Detach the first occurrence of `child` from `parent`.
    ///
    /// Returns whether anything was removed.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let Some(data) = self.nodes.get_mut(parent.0) else {
            return false;
        };
        let Some(pos) = data.children.iter().position(|&c| c == child) else {
            return false;
        };
        data.children.remove(pos);
        if let Some(child_data) = self.nodes.get_mut(child.0) {
            child_data.parent = None;
        }
        true
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> Result<()> {
        self.data_mut(id)?.name = Some(name.into());
        Ok(())
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<()> {
        self.data_mut(id)?.text = Some(text.into());
        Ok(())
    }

    pub fn set_location(&mut self, id: NodeId, location: SourceLocation) -> Result<()> {
        self.data_mut(id)?.location = Some(location);
        Ok(())
    }

    pub fn set_error(&mut self, id: NodeId, is_error: bool) -> Result<()> {
        self.data_mut(id)?.is_error = is_error;
        Ok(())
    }

    pub fn set_missing(&mut self, id: NodeId, is_missing: bool) -> Result<()> {
        self.data_mut(id)?.is_missing = is_missing;
        Ok(())
    }

    pub fn insert_metadata(
        &mut self,
        id: NodeId,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<()> {
        self.data_mut(id)?.metadata.insert(key.into(), value.into());
        Ok(())
    }

    fn data_mut(&mut self, id: NodeId) -> Result<&mut NodeData> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| CodegraphError::invalid_argument(format!("node {} does not exist", id)))
    }

    /// True when `candidate` is `node` or one of its ancestors
    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.get(id).and_then(|d| d.parent);
        }
        false
    }
}

/// Borrowed view of one node and its subtree
#[derive(Clone, Copy)]
pub struct AstNode<'a> {
    arena: &'a AstArena,
    id: NodeId,
    data: &'a NodeData,
}

impl<'a> AstNode<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn data(&self) -> &'a NodeData {
        self.data
    }

    pub fn node_type(&self) -> &'a str {
        &self.data.node_type
    }

    pub fn name(&self) -> Option<&'a str> {
        self.data.name.as_deref()
    }

    pub fn location(&self) -> Option<&'a SourceLocation> {
        self.data.location.as_ref()
    }

    /// Raw text captured at build time (leaf nodes only, depending on config)
    pub fn text(&self) -> Option<&'a str> {
        self.data.text.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.data.is_error
    }

    pub fn is_missing(&self) -> bool {
        self.data.is_missing
    }

    pub fn is_root(&self) -> bool {
        self.data.parent.is_none()
    }

    pub fn metadata(&self) -> &'a FxHashMap<String, Value> {
        &self.data.metadata
    }

    pub fn metadata_value(&self, key: &str) -> Option<&'a Value> {
        self.data.metadata.get(key)
    }

    pub fn parent(&self) -> Option<AstNode<'a>> {
        self.data.parent.and_then(|p| self.arena.node(p))
    }

    /// Direct children in document order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = AstNode<'a>> + 'a {
        let arena = self.arena;
        self.data.children.iter().filter_map(move |&c| arena.node(c))
    }

    pub fn child_count(&self) -> usize {
        self.data.children.len()
    }

    pub fn child(&self, index: usize) -> Option<AstNode<'a>> {
        self.data
            .children
            .get(index)
            .and_then(|&c| self.arena.node(c))
    }

    /// First direct child whose name matches case-insensitively
    pub fn get_child(&self, name: &str) -> Option<AstNode<'a>> {
        self.children()
            .find(|c| c.name().is_some_and(|n| eq_ignore_case(n, name)))
    }

    /// Lazy pre-order walk of every node below this one (self excluded)
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants(PreOrder::below(*self))
    }

    /// Descendants whose node type satisfies `predicate`
    pub fn descendants_where<F>(&self, mut predicate: F) -> impl Iterator<Item = AstNode<'a>>
    where
        F: FnMut(&str) -> bool,
    {
        self.descendants().filter(move |n| predicate(n.node_type()))
    }

    /// First descendant with a case-insensitively matching name
    pub fn find_descendant(&self, name: &str) -> Option<AstNode<'a>> {
        self.descendants()
            .find(|n| n.name().is_some_and(|n| eq_ignore_case(n, name)))
    }

    /// All descendants with a case-insensitively matching name, in pre-order
    pub fn find_descendants(&self, name: &str) -> Vec<AstNode<'a>> {
        self.descendants()
            .filter(|n| n.name().is_some_and(|n| eq_ignore_case(n, name)))
            .collect()
    }

    /// Nodes from the root down to and including this node
    pub fn path(&self) -> Vec<AstNode<'a>> {
        let mut path = vec![*self];
        let mut current = self.parent();
        while let Some(node) = current {
            path.push(node);
            current = node.parent();
        }
        path.reverse();
        path
    }

    /// Number of parent hops to the root (root = 0)
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.data.parent;
        while let Some(id) = current {
            depth += 1;
            current = self.arena.get(id).and_then(|d| d.parent);
        }
        depth
    }

    /// Double-dispatch entry point for [`AstVisitor`]
    pub fn accept<V: AstVisitor<'a>>(self, visitor: &mut V) -> V::Output {
        if self.is_error() {
            visitor.visit_error(self)
        } else if self.is_missing() {
            visitor.visit_missing(self)
        } else {
            visitor.visit_node(self)
        }
    }
}

impl PartialEq for AstNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl Eq for AstNode<'_> {}

impl Hash for AstNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for AstNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstNode")
            .field("id", &self.id)
            .field("node_type", &self.data.node_type)
            .field("name", &self.data.name)
            .field("location", &self.data.location)
            .field("children", &self.data.children.len())
            .finish()
    }
}

/// Pre-order iterator yielding each node with its depth relative to the start
#[derive(Clone)]
pub struct PreOrder<'a> {
    arena: &'a AstArena,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> PreOrder<'a> {
    /// Walk `start` and everything below it; `start` has depth 0
    pub fn from_node(start: AstNode<'a>) -> Self {
        Self {
            arena: start.arena,
            stack: vec![(start.id, 0)],
        }
    }

    /// Walk everything below `start`; its children have depth 1
    fn below(start: AstNode<'a>) -> Self {
        Self {
            arena: start.arena,
            stack: start.data.children.iter().rev().map(|&c| (c, 1)).collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (AstNode<'a>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            let Some(node) = self.arena.node(id) else {
                continue;
            };
            self.stack
                .extend(node.data.children.iter().rev().map(|&c| (c, depth + 1)));
            return Some((node, depth));
        }
        None
    }
}

/// Pre-order descendants of a node (the node itself excluded)
#[derive(Clone)]
pub struct Descendants<'a>(PreOrder<'a>);

impl<'a> Iterator for Descendants<'a> {
    type Item = AstNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(node, _)| node)
    }
}

/// Case-insensitive comparison with an ASCII fast path
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}
