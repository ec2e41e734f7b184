//! Input discovery, tree loading and the declaration-building run.

use anyhow::{Context, Result, bail};
use csz_common::TreeId;
use csz_declarations::parallel::{BuildStats, FileDeclarations, build_trees_with_stats};
use csz_syntax::SyntaxTree;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::args::CliArgs;
use crate::config::{ResolvedOptions, load_config, resolve_options};

/// Extension of serialized syntax trees.
pub const TREE_EXTENSION: &str = "json";

/// Everything one run produced.
#[derive(Debug)]
pub struct RunResult {
    pub files: Vec<FileDeclarations>,
    pub stats: BuildStats,
}

impl RunResult {
    /// Any error-severity diagnostic in any file.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.stats.error_count > 0
    }

    /// Any file whose tree could not be processed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.stats.failed_files > 0
    }
}

/// Expand the command-line inputs: files are taken as given, directories
/// are walked for `*.json` trees. Directory results are sorted so runs are
/// reproducible.
pub fn discover_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
            continue;
        }
        if !input.is_dir() {
            bail!("input not found: {}", input.display());
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(input).follow_links(true) {
            let entry =
                entry.with_context(|| format!("failed to walk {}", input.display()))?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().is_some_and(|ext| ext == TREE_EXTENSION)
            {
                found.push(path.to_path_buf());
            }
        }
        found.sort();
        debug!(dir = %input.display(), count = found.len(), "discovered trees");
        files.extend(found);
    }
    Ok(files)
}

/// Read one serialized tree. Each loaded tree gets the id of its input
/// position so locations stay distinguishable across files.
pub fn load_tree(path: &Path, id: TreeId, options: &ResolvedOptions) -> Result<SyntaxTree> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut tree: SyntaxTree = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse syntax tree {}", path.display()))?;

    tree.id = id;
    if tree.file_name.is_empty() {
        tree.file_name = path.display().to_string();
    }
    options.apply(&mut tree.options);
    Ok(tree)
}

pub fn load_trees(paths: &[PathBuf], options: &ResolvedOptions) -> Result<Vec<SyntaxTree>> {
    paths
        .par_iter()
        .enumerate()
        .map(|(index, path)| {
            let id = u32::try_from(index).context("too many input files")?;
            load_tree(path, TreeId(id), options)
        })
        .collect()
}

/// Build declaration trees for already-loaded syntax trees.
pub fn build(trees: &[SyntaxTree], options: &ResolvedOptions) -> RunResult {
    let (files, stats) = build_trees_with_stats(trees, &options.declarations);
    info!(
        files = stats.file_count,
        declarations = stats.declaration_count,
        diagnostics = stats.diagnostic_count,
        failed = stats.failed_files,
        "declaration trees built"
    );
    RunResult { files, stats }
}

/// Full run: config, discovery, loading and building.
pub fn run(args: &CliArgs) -> Result<RunResult> {
    let config = match &args.config {
        Some(path) => Some(load_config(path)?),
        None => None,
    };
    let options = resolve_options(args, config.as_ref())?;
    debug!(?options, "resolved options");

    let paths = discover_inputs(&args.inputs)?;
    if paths.is_empty() {
        bail!("no syntax tree files found");
    }
    let trees = load_trees(&paths, &options)?;
    Ok(build(&trees, &options))
}
