use tree_sitter::Node;

use crate::model::ImportRecord;
use crate::util::{trim_quotes, txt};
use crate::walk::preorder;

/// Recover every import declaration and `require(...)` call in the tree.
///
/// Declarations come first in declaration order; require records are
/// appended after them. The merge step does not re-sort, so this ordering is
/// part of the observable output.
pub(super) fn collect_imports(root: Node, src: &[u8]) -> Vec<ImportRecord> {
    let mut records = Vec::new();

    preorder(Some(root), &mut |node| {
        if matches!(node.kind(), "import_statement" | "import_declaration") {
            records.push(parse_import_declaration(node, src));
        }
    });

    for source in collect_require_sources(root, src) {
        records.push(ImportRecord::bare(source));
    }

    records
}

/// Parse one import declaration into a normalized record.
///
/// A declaration with no resolvable source still yields a record with an
/// empty `source`; callers filter if they only want resolved imports.
fn parse_import_declaration(node: Node, src: &[u8]) -> ImportRecord {
    let source = node
        .child_by_field_name("source")
        .or_else(|| node.child_by_field_name("module_name"))
        .map(|s| trim_quotes(txt(s, src)).to_string())
        .unwrap_or_default();

    let mut record = ImportRecord {
        source,
        default_import: None,
        named_imports: Vec::new(),
        namespace_import: None,
    };

    preorder(Some(node), &mut |child| match child.kind() {
        "import_clause" => {
            if let Some(name) = default_binding(child) {
                record.default_import = Some(txt(name, src).to_string());
            }
        }
        "import_specifier" => {
            let name = child.child_by_field_name("name");
            let alias = child.child_by_field_name("alias");
            match (name, alias) {
                (Some(name), Some(alias)) => record
                    .named_imports
                    .push(format!("{} as {}", txt(name, src), txt(alias, src))),
                (Some(name), None) => record.named_imports.push(txt(name, src).to_string()),
                _ => {}
            }
        }
        "namespace_import" => {
            record.namespace_import = Some(namespace_binding(child, src));
        }
        "import_identifier" => {
            if record.default_import.is_none() {
                record.default_import = Some(txt(child, src).to_string());
            }
        }
        _ => {}
    });

    record
}

/// The default-import identifier of an `import_clause`.
///
/// Some grammar versions expose it as the `name` field; current ones leave it
/// as a bare `identifier` child next to `named_imports`/`namespace_import`.
fn default_binding(clause: Node) -> Option<Node> {
    clause.child_by_field_name("name").or_else(|| {
        (0..clause.child_count())
            .filter_map(|i| clause.child(i))
            .find(|c| c.kind() == "identifier")
    })
}

/// Render a `namespace_import` as `"* as alias"`.
///
/// Falls back to the raw node text when the star and alias are not two
/// distinct resolvable children (grammar-shape fallback).
fn namespace_binding(node: Node, src: &[u8]) -> String {
    let star = node.child(0);
    let alias = node.child(2);
    match (star, alias) {
        (Some(star), Some(alias)) => format!("{} as {}", txt(star, src), txt(alias, src)),
        _ => txt(node, src).to_string(),
    }
}

/// Collect the string-literal arguments of `require(...)` calls at any
/// nesting depth. Dynamic and templated targets are ignored.
fn collect_require_sources(root: Node, src: &[u8]) -> Vec<String> {
    let mut sources = Vec::new();

    preorder(Some(root), &mut |node| {
        if node.kind() != "call_expression" {
            return;
        }
        let Some(callee) = node.child_by_field_name("function") else {
            return;
        };
        if callee.kind() != "identifier" || txt(callee, src) != "require" {
            return;
        }
        let Some(args) = node.child_by_field_name("arguments") else {
            return;
        };
        for i in 0..args.child_count() {
            if let Some(arg) = args.child(i) {
                if arg.kind() == "string" {
                    sources.push(trim_quotes(txt(arg, src)).to_string());
                }
            }
        }
    });

    sources
}
