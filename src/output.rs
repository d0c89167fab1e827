use std::fmt;

use crate::error::JsxmapError;
use crate::model::{ComponentRef, FileAnalysis, ImportRecord};

/// Render the analyses as a JSON array, the same record shape the per-file
/// engine produces: `{filename, imports, components}` with camelCase import
/// fields and `null` sources for local components.
pub fn to_json(analyses: &[FileAnalysis], pretty: bool) -> Result<String, JsxmapError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(analyses)?
    } else {
        serde_json::to_string(analyses)?
    };
    Ok(rendered)
}

/// Human-readable report over a whole scan.
pub struct Report<'a>(pub &'a [FileAnalysis]);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "no JSX files found");
        }
        for (i, analysis) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_file(f, analysis)?;
        }
        writeln!(f)?;
        writeln!(f, "{} file(s) with JSX", self.0.len())
    }
}

fn write_file(f: &mut fmt::Formatter<'_>, analysis: &FileAnalysis) -> fmt::Result {
    writeln!(f, "{}", analysis.filename)?;

    if !analysis.imports.is_empty() {
        writeln!(f, "  imports:")?;
        for import in &analysis.imports {
            writeln!(f, "    {}", ImportLine(import))?;
        }
    }

    if !analysis.components.is_empty() {
        writeln!(f, "  components:")?;
        for component in &analysis.components {
            writeln!(f, "    {}", ComponentLine(component))?;
        }
    }

    Ok(())
}

struct ImportLine<'a>(&'a ImportRecord);

impl fmt::Display for ImportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let source = if record.source.is_empty() {
            "<unresolved>"
        } else {
            record.source.as_str()
        };

        let mut bindings = Vec::new();
        if let Some(default) = &record.default_import {
            bindings.push(default.clone());
        }
        if !record.named_imports.is_empty() {
            bindings.push(format!("{{{}}}", record.named_imports.join(", ")));
        }
        if let Some(namespace) = &record.namespace_import {
            bindings.push(namespace.clone());
        }

        if bindings.is_empty() {
            write!(f, "{source}")
        } else {
            write!(f, "{source}: {}", bindings.join(", "))
        }
    }
}

struct ComponentLine<'a>(&'a ComponentRef);

impl fmt::Display for ComponentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.source {
            Some(source) => write!(f, "{}  (from {source})", self.0.name),
            None => write!(f, "{}  (local)", self.0.name),
        }
    }
}
