use tree_sitter::Language;

/// Grammar families used to parse candidate files.
///
/// This is the central isolation boundary between file extensions and
/// tree-sitter grammars. Detectors stay grammar-agnostic and rely only on
/// kind strings and named fields shared by both grammars; new extensions plug
/// in here rather than as `if ext == ...` checks across the codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    Javascript,
    Typescript,
}

impl Grammar {
    /// Resolve a file extension to a grammar (non-error variant).
    ///
    /// `.ts`/`.tsx` take the TypeScript grammar; `.js`/`.jsx` the JavaScript
    /// one. Anything else is not a candidate file.
    pub fn for_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" | "tsx" => Some(Self::Typescript),
            "js" | "jsx" => Some(Self::Javascript),
            _ => None,
        }
    }

    /// tree-sitter parser language for this grammar.
    ///
    /// The TSX variant of the TypeScript grammar is required: the plain-TS
    /// variant produces no `jsx_element` nodes, and every `.tsx` file would
    /// fail the JSX gate.
    pub fn tree_sitter_language(self) -> Language {
        match self {
            Self::Javascript => tree_sitter_javascript::LANGUAGE.into(),
            Self::Typescript => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Stable tag used in diagnostics.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Typescript => "typescript",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typescript_extensions_select_typescript_grammar() {
        assert_eq!(Grammar::for_extension("ts"), Some(Grammar::Typescript));
        assert_eq!(Grammar::for_extension("tsx"), Some(Grammar::Typescript));
    }

    #[test]
    fn javascript_extensions_select_javascript_grammar() {
        assert_eq!(Grammar::for_extension("js"), Some(Grammar::Javascript));
        assert_eq!(Grammar::for_extension("jsx"), Some(Grammar::Javascript));
    }

    #[test]
    fn other_extensions_are_not_candidates() {
        assert_eq!(Grammar::for_extension("md"), None);
        assert_eq!(Grammar::for_extension("css"), None);
        assert_eq!(Grammar::for_extension(""), None);
    }
}
