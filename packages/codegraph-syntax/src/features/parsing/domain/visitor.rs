//! Visitor hook over AST nodes
//!
//! Consumers implement [`AstVisitor`] and call [`AstNode::accept`]; the node
//! picks the method matching its flags.

use super::ast_node::AstNode;

pub trait AstVisitor<'a> {
    type Output;

    fn visit_node(&mut self, node: AstNode<'a>) -> Self::Output;

    /// Called for nodes the grammar could not match
    fn visit_error(&mut self, node: AstNode<'a>) -> Self::Output {
        self.visit_node(node)
    }

    /// Called for zero-width nodes inserted by error recovery
    fn visit_missing(&mut self, node: AstNode<'a>) -> Self::Output {
        self.visit_node(node)
    }
}

/// Renders a subtree as an S-expression, e.g.
/// `(module (class_definition name: "Foo" (block)))`
#[derive(Debug, Default)]
pub struct SexpWriter {
    out: String,
}

impl SexpWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(node: AstNode<'_>) -> String {
        let mut writer = Self::new();
        node.accept(&mut writer);
        writer.out
    }

    fn write_children(&mut self, node: AstNode<'_>) {
        for child in node.children() {
            self.out.push(' ');
            child.accept(self);
        }
    }
}

impl<'a> AstVisitor<'a> for SexpWriter {
    type Output = ();

    fn visit_node(&mut self, node: AstNode<'a>) {
        self.out.push('(');
        self.out.push_str(node.node_type());
        if let Some(name) = node.name() {
            self.out.push_str(&format!(" name: {:?}", name));
        }
        self.write_children(node);
        self.out.push(')');
    }

    fn visit_error(&mut self, node: AstNode<'a>) {
        self.out.push_str("(ERROR");
        self.write_children(node);
        self.out.push(')');
    }

    fn visit_missing(&mut self, node: AstNode<'a>) {
        self.out.push_str("(MISSING ");
        self.out.push_str(node.node_type());
        self.out.push(')');
    }
}
