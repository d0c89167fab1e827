use tree_sitter::{Parser, Tree};

use crate::error::JsxmapError;
use crate::lang::Grammar;

/// A reusable parser for candidate source files.
///
/// One instance is shared across a scan. The grammar is configured and the
/// text parsed in a single call, so the language always matches the tree
/// handed back; per-file grammar selection cannot be reordered past the
/// parse.
pub struct SourceParser {
    inner: Parser,
}

impl SourceParser {
    pub fn new() -> Self {
        Self {
            inner: Parser::new(),
        }
    }

    /// Parse raw source text with the given grammar.
    pub fn parse(&mut self, source: &str, grammar: Grammar) -> Result<Tree, JsxmapError> {
        self.inner
            .set_language(&grammar.tree_sitter_language())
            .map_err(|e| JsxmapError::ParseFailed(e.to_string()))?;

        self.inner
            .parse(source, None)
            .ok_or_else(|| JsxmapError::ParseFailed(format!("{} parser returned no tree", grammar.tag())))
    }
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_javascript_source() {
        let mut parser = SourceParser::new();
        let tree = parser.parse("const x = 1;", Grammar::Javascript).unwrap();
        assert_eq!(tree.root_node().kind(), "program");
    }

    #[test]
    fn parses_tsx_source_with_jsx_nodes() {
        let mut parser = SourceParser::new();
        let tree = parser
            .parse("const el = <div className=\"a\" />;", Grammar::Typescript)
            .unwrap();
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn same_parser_switches_grammars_between_parses() {
        let mut parser = SourceParser::new();
        let ts = parser
            .parse("const x: number = 1;", Grammar::Typescript)
            .unwrap();
        assert!(!ts.root_node().has_error());

        let js = parser.parse("const y = require('fs');", Grammar::Javascript).unwrap();
        assert!(!js.root_node().has_error());
    }
}
