use tree_sitter::Node;

use crate::util::txt;
use crate::walk::preorder;

/// Placeholder name for anonymous default exports.
const DEFAULT_EXPORT_NAME: &str = "DefaultExport";

/// Ancestor kinds that mark a declaration as exported. Only the first kind
/// occurs in current grammars; the rest cover grammar variation.
const EXPORT_KINDS: &[&str] = &[
    "export_statement",
    "export_named_declaration",
    "export_default_declaration",
    "export_declaration",
];

/// Collect the names of exported top-level declarations: classes, functions,
/// variable bindings whose value is a function, and default exports.
///
/// Order-preserving, deduplicated by exact string equality.
pub(super) fn collect_exported_components(root: Node, src: &[u8]) -> Vec<String> {
    let mut names = Vec::new();

    preorder(Some(root), &mut |node| match node.kind() {
        "class_declaration" | "function_declaration" => {
            if is_exported(node) {
                if let Some(name) = node.child_by_field_name("name") {
                    names.push(txt(name, src).to_string());
                }
            }
        }
        // `var` parses as variable_declaration, `let`/`const` as
        // lexical_declaration; both carry variable_declarator children.
        "variable_declaration" | "lexical_declaration" => {
            if is_exported(node) {
                collect_function_declarators(node, src, &mut names);
            }
        }
        "export_default_declaration" => {
            if let Some(name) = default_export_name(node, src) {
                names.push(name);
            }
        }
        _ => {}
    });

    dedup_preserving_order(names)
}

/// Walk upward through parent links looking for an export ancestor.
fn is_exported(node: Node) -> bool {
    let mut current = Some(node);
    while let Some(n) = current {
        if EXPORT_KINDS.contains(&n.kind()) {
            return true;
        }
        current = n.parent();
    }
    false
}

/// Push the name of every declarator whose value is a function.
fn collect_function_declarators(node: Node, src: &[u8], names: &mut Vec<String>) {
    for i in 0..node.child_count() {
        let Some(declarator) = node.child(i) else {
            continue;
        };
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        let name = declarator.child_by_field_name("name");
        let value = declarator.child_by_field_name("value");
        if let (Some(name), Some(value)) = (name, value) {
            if is_function_value(value) {
                names.push(txt(name, src).to_string());
            }
        }
    }
}

/// A declarator value counts as a function when its kind contains
/// `arrow_function`, is exactly `function`, or is a parenthesized expression
/// wrapping one (unwrapped recursively).
fn is_function_value(node: Node) -> bool {
    let kind = node.kind();
    if kind.contains("arrow_function") || kind == "function" {
        return true;
    }
    if kind == "parenthesized_expression" && node.named_child_count() == 1 {
        return node.named_child(0).is_some_and(is_function_value);
    }
    false
}

/// Resolve an `export_default_declaration`'s component name.
///
/// Named declarations keep their name, anonymous function/class forms get the
/// `DefaultExport` placeholder, a bare identifier re-export uses its text,
/// and any other shape contributes nothing.
fn default_export_name(node: Node, src: &[u8]) -> Option<String> {
    let declaration = node.child_by_field_name("declaration")?;

    if declaration.kind() == "function_declaration" {
        return Some(named_or_placeholder(declaration, src));
    }

    if is_function_value(declaration) || declaration.kind() == "class_declaration" {
        return Some(named_or_placeholder(declaration, src));
    }

    if declaration.kind() == "identifier" {
        return Some(txt(declaration, src).to_string());
    }

    None
}

fn named_or_placeholder(node: Node, src: &[u8]) -> String {
    node.child_by_field_name("name")
        .map_or_else(|| DEFAULT_EXPORT_NAME.to_string(), |n| txt(n, src).to_string())
}

fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Grammar;
    use crate::parser::SourceParser;

    fn exported(src: &str, grammar: Grammar) -> Vec<String> {
        let tree = SourceParser::new().parse(src, grammar).unwrap();
        collect_exported_components(tree.root_node(), src.as_bytes())
    }

    #[test]
    fn exported_class_yields_its_name() {
        let names = exported("export class Header extends Component {}", Grammar::Javascript);
        assert_eq!(names, vec!["Header"]);
    }

    #[test]
    fn exported_function_yields_its_name() {
        let names = exported("export function Sidebar() { return null; }", Grammar::Javascript);
        assert_eq!(names, vec!["Sidebar"]);
    }

    #[test]
    fn unexported_declarations_contribute_nothing() {
        let names = exported(
            "class Hidden {}\nfunction helper() {}\nconst fn = () => {};",
            Grammar::Javascript,
        );
        assert!(names.is_empty());
    }

    #[test]
    fn exported_arrow_const_yields_its_name() {
        let names = exported("export const Widget = () => <span/>;", Grammar::Javascript);
        assert_eq!(names, vec!["Widget"]);
    }

    #[test]
    fn exported_var_arrow_yields_its_name() {
        let names = exported("export var Legacy = () => null;", Grammar::Javascript);
        assert_eq!(names, vec!["Legacy"]);
    }

    #[test]
    fn exported_parenthesized_arrow_yields_its_name() {
        let names = exported("export const Wrapped = (() => null);", Grammar::Javascript);
        assert_eq!(names, vec!["Wrapped"]);
    }

    #[test]
    fn non_function_const_is_ignored() {
        let names = exported("export const THEME = { dark: true };", Grammar::Javascript);
        assert!(names.is_empty());
    }

    #[test]
    fn mixed_declarators_keep_only_function_values() {
        let names = exported(
            "export const SIZE = 4, Button = () => null;",
            Grammar::Javascript,
        );
        assert_eq!(names, vec!["Button"]);
    }

    #[test]
    fn default_exported_named_function_keeps_its_name() {
        let names = exported(
            "export default function Home() { return null; }",
            Grammar::Javascript,
        );
        assert_eq!(names, vec!["Home"]);
    }

    #[test]
    fn default_exported_class_keeps_its_name() {
        let names = exported("export default class App {}", Grammar::Javascript);
        assert_eq!(names, vec!["App"]);
    }

    #[test]
    fn duplicate_names_are_deduplicated_in_order() {
        let names = exported(
            "export function Card() {}\nexport class Panel {}",
            Grammar::Javascript,
        );
        assert_eq!(names, vec!["Card", "Panel"]);
    }

    #[test]
    fn typescript_exports_are_detected() {
        let names = exported(
            "export const List: React.FC = () => <ul/>;\nexport class Grid {}",
            Grammar::Typescript,
        );
        assert_eq!(names, vec!["List", "Grid"]);
    }

    #[test]
    fn lowercase_exports_are_still_collected() {
        // The capitalization heuristic applies to imported bindings only;
        // locally exported declarations are collected regardless of case.
        let names = exported("export const useThing = () => 1;", Grammar::Javascript);
        assert_eq!(names, vec!["useThing"]);
    }
}
