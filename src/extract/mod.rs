mod exports;
mod imports;
mod jsx;
mod merge;

use crate::error::JsxmapError;
use crate::lang::Grammar;
use crate::model::FileAnalysis;
use crate::parser::SourceParser;

/// Analyze one source file: parse, gate on JSX, extract imports and exported
/// components, merge into the per-file record.
///
/// Returns `Ok(None)` for files without JSX — absence, not an empty record.
/// Import and export extraction both read the same tree; no work is spent on
/// them when the gate fails.
pub fn analyze_source(
    parser: &mut SourceParser,
    filename: &str,
    grammar: Grammar,
    source: &str,
) -> Result<Option<FileAnalysis>, JsxmapError> {
    let tree = parser.parse(source, grammar)?;
    let root = tree.root_node();
    let src = source.as_bytes();

    if !jsx::contains_jsx(root) {
        return Ok(None);
    }

    let imports = imports::collect_imports(root, src);
    let local = exports::collect_exported_components(root, src);
    let components = merge::merge_components(local, &imports);

    Ok(Some(FileAnalysis {
        filename: filename.to_string(),
        imports,
        components,
    }))
}
