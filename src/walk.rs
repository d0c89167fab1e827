use tree_sitter::Node;

/// Depth-first pre-order traversal over a subtree.
///
/// Invokes the visitor on the root first, then on every descendant, children
/// left to right. An absent root is a no-op, so optional field lookups can be
/// passed straight in. This is the single traversal primitive; every detector
/// is a visitor handed to it.
pub fn preorder<'t, F>(root: Option<Node<'t>>, visit: &mut F)
where
    F: FnMut(Node<'t>),
{
    let Some(node) = root else { return };
    visit(node);
    for i in 0..node.child_count() {
        preorder(node.child(i), visit);
    }
}
