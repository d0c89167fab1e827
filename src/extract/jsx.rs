use tree_sitter::Node;

use crate::walk::preorder;

/// Returns `true` iff the tree contains a JSX element anywhere.
///
/// Files that fail this test are elided from the scan output entirely; no
/// import or export work is spent on them.
pub(super) fn contains_jsx(root: Node) -> bool {
    let mut found = false;
    preorder(Some(root), &mut |node| {
        if is_jsx_node(node.kind()) {
            found = true;
        }
    });
    found
}

fn is_jsx_node(kind: &str) -> bool {
    matches!(kind, "jsx_element" | "jsx_self_closing_element")
}
