use anyhow::Result;
use colored::Colorize;
use csz_common::diagnostics::{DiagnosticCategory, display_code};
use csz_declarations::parallel::{BuildStats, FileDeclarations};
use csz_declarations::{
    Declaration, DeclarationDiagnostic, DeclarationRef, RootNamespaceDeclaration,
};
use serde_json::{Value, json};

/// Renders declaration trees as an indented outline.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// Outline of one file followed by its diagnostics.
    pub fn render_file(&self, file: &FileDeclarations) -> String {
        let mut out = self.paint_header(&file.file_name);
        out.push('\n');

        let root = match &file.root {
            Ok(root) => root,
            Err(error) => {
                out.push_str("  ");
                out.push_str(&self.format_category(DiagnosticCategory::Error));
                out.push_str(": ");
                out.push_str(&error.to_string());
                out.push('\n');
                return out;
            }
        };

        for directive in &root.reference_directives {
            out.push_str(&format!("  #r \"{}\"\n", directive.file));
        }
        let mut stack: Vec<(DeclarationRef<'_>, usize)> = root
            .children
            .iter()
            .rev()
            .filter_map(Declaration::as_ref)
            .map(|decl| (decl, 1))
            .collect();
        while let Some((decl, depth)) = stack.pop() {
            out.push_str(&"  ".repeat(depth));
            out.push_str(&self.format_declaration(decl));
            out.push('\n');
            stack.extend(decl.children().into_iter().rev().map(|child| (child, depth + 1)));
        }

        for diagnostic in root.all_diagnostics() {
            out.push_str(&self.format_diagnostic(&file.file_name, diagnostic));
            out.push('\n');
        }
        out
    }

    pub fn render_stats(&self, stats: &BuildStats) -> String {
        let mut line = format!(
            "{} files, {} declarations, {} diagnostics ({} errors)",
            stats.file_count, stats.declaration_count, stats.diagnostic_count, stats.error_count
        );
        if stats.failed_files > 0 {
            line.push_str(&format!(", {} failed", stats.failed_files));
        }
        line
    }

    /// `kind name<arity> [modifiers] { members }`
    pub fn format_declaration(&self, decl: DeclarationRef<'_>) -> String {
        let kind = decl.kind().as_str();
        let mut name = if decl.name().is_empty() {
            "<missing>".to_string()
        } else {
            decl.name().to_string()
        };

        let Some(ty) = decl.as_type() else {
            return format!("{} {}", self.paint_kind(kind), self.paint_name(&name));
        };

        if ty.arity > 0 {
            name.push('<');
            name.push_str(&",".repeat(ty.arity as usize - 1));
            name.push('>');
        }
        let mut line = format!("{} {}", self.paint_kind(kind), self.paint_name(&name));

        let modifiers: Vec<&str> = ty.modifiers.keywords().collect();
        if !modifiers.is_empty() {
            line.push_str(&format!(" [{}]", modifiers.join(" ")));
        }
        let members = ty.sorted_member_names();
        if !members.is_empty() {
            line.push_str(&format!(" {{ {} }}", members.join(", ")));
        }
        line
    }

    pub fn format_diagnostic(&self, file_name: &str, diagnostic: &DeclarationDiagnostic) -> String {
        let span = diagnostic.location.span;
        format!(
            "{}({}..{}): {} {}: {}",
            file_name,
            span.start,
            span.end,
            self.format_category(diagnostic.category()),
            display_code(diagnostic.code),
            diagnostic.message()
        )
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.as_str();
        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn paint_header(&self, file_name: &str) -> String {
        if self.color {
            file_name.underline().to_string()
        } else {
            file_name.to_string()
        }
    }

    fn paint_kind(&self, kind: &str) -> String {
        if self.color {
            kind.cyan().to_string()
        } else {
            kind.to_string()
        }
    }

    fn paint_name(&self, name: &str) -> String {
        if self.color {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }
}

/// One JSON document for the whole batch: per file either its declaration
/// tree plus rendered diagnostics, or the error that stopped it.
pub fn render_json(files: &[FileDeclarations], stats: &BuildStats) -> Result<String> {
    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        let entry = match &file.root {
            Ok(root) => json!({
                "file": file.file_name,
                "declarations": serde_json::to_value(root)?,
                "diagnostics": diagnostics_json(root),
            }),
            Err(error) => json!({
                "file": file.file_name,
                "error": error.to_string(),
            }),
        };
        entries.push(entry);
    }

    let document = json!({
        "files": entries,
        "stats": {
            "files": stats.file_count,
            "declarations": stats.declaration_count,
            "diagnostics": stats.diagnostic_count,
            "errors": stats.error_count,
            "failed": stats.failed_files,
        },
    });
    Ok(serde_json::to_string_pretty(&document)?)
}

fn diagnostics_json(root: &RootNamespaceDeclaration) -> Value {
    root.all_diagnostics()
        .into_iter()
        .map(|diagnostic| {
            json!({
                "code": display_code(diagnostic.code),
                "category": diagnostic.category().as_str(),
                "message": diagnostic.message(),
                "start": diagnostic.location.span.start,
                "end": diagnostic.location.span.end,
            })
        })
        .collect()
}
