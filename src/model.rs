use serde::Serialize;

/// One `import` statement or `require(...)` call recovered from a file.
///
/// Named imports are string-encoded as `"name"` or `"name as alias"`; the
/// merge step splits them back apart. `source` is empty only when a
/// declaration carried no resolvable source field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    pub source: String,
    pub default_import: Option<String>,
    pub named_imports: Vec<String>,
    pub namespace_import: Option<String>,
}

impl ImportRecord {
    /// A record bound to a source path only, as produced by `require(...)`.
    pub fn bare(source: String) -> Self {
        Self {
            source,
            default_import: None,
            named_imports: Vec::new(),
            namespace_import: None,
        }
    }
}

/// A component declared in the analyzed file (`source: None`) or imported
/// from another module. Two refs are the same component iff both fields
/// match; same-named components from different modules stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRef {
    pub name: String,
    pub source: Option<String>,
}

/// Per-file record, produced only for files that render JSX.
#[derive(Debug, Serialize)]
pub struct FileAnalysis {
    pub filename: String,
    pub imports: Vec<ImportRecord>,
    pub components: Vec<ComponentRef>,
}
