use std::path::Path;

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::JsxmapError;
use crate::extract;
use crate::lang::Grammar;
use crate::model::FileAnalysis;
use crate::parser::SourceParser;

/// Analyze every candidate file under `root`.
///
/// Walks the tree recursively, picks up `.js`/`.jsx`/`.ts`/`.tsx` files,
/// and runs the per-file pipeline with one reused parser. Files without JSX
/// are omitted from the result; files that fail to read or parse are logged
/// and skipped so one bad file never aborts the scan.
pub fn scan_project(root: &Path) -> Vec<FileAnalysis> {
    let mut parser = SourceParser::new();
    let mut results = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("walk: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let Some(grammar) = Grammar::for_extension(ext) else {
            continue;
        };

        match analyze_path(&mut parser, root, path, grammar) {
            Ok(Some(analysis)) => results.push(analysis),
            Ok(None) => debug!("{}: no JSX, skipped", path.display()),
            Err(e) => warn!("{e}"),
        }
    }

    results
}

/// Read one file and run the core pipeline with a root-relative filename.
fn analyze_path(
    parser: &mut SourceParser,
    root: &Path,
    path: &Path,
    grammar: Grammar,
) -> Result<Option<FileAnalysis>, JsxmapError> {
    let source = std::fs::read_to_string(path).map_err(|e| JsxmapError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let filename = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned();

    extract::analyze_source(parser, &filename, grammar, &source)
}
