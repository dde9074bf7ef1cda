//! Custom assertions for syntax tree verification

use codegraph_syntax::SyntaxTree;

/// Assert that every child points back at the node listing it
pub fn assert_parent_links(tree: &SyntaxTree) {
    for node in tree.all_nodes() {
        for child in node.children() {
            assert_eq!(
                child.parent().map(|p| p.id()),
                Some(node.id()),
                "child {} of {} has a broken back-reference",
                child.id(),
                node.id()
            );
        }
    }
    assert!(tree.root().parent().is_none());
}

/// Assert that the tree parsed without error nodes
pub fn assert_no_errors(tree: &SyntaxTree) {
    assert!(
        !tree.has_errors(),
        "Expected no errors, got: {:?}\n{}",
        tree.errors(),
        tree.to_sexp()
    );
}
