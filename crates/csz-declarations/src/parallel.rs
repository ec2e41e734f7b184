//! Batch declaration building.
//!
//! Each file gets its own builder and the trees share nothing, so files are
//! built on the rayon pool without synchronization. Results keep input order.

use crate::builder::{DeclarationOptions, DeclarationTreeBuilder};
use crate::declaration::RootNamespaceDeclaration;
use crate::error::Result;
use csz_syntax::SyntaxTree;
use rayon::prelude::*;
use tracing::debug;

/// Declaration tree of one input file.
#[derive(Debug)]
pub struct FileDeclarations {
    pub file_name: String,
    pub root: Result<RootNamespaceDeclaration>,
}

/// Totals over a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub file_count: usize,
    /// Namespace and type declarations, roots excluded.
    pub declaration_count: usize,
    pub diagnostic_count: usize,
    /// Diagnostics with error severity.
    pub error_count: usize,
    /// Files whose syntax tree could not be processed at all.
    pub failed_files: usize,
}

/// Build one file.
pub fn build_file(tree: &SyntaxTree, options: &DeclarationOptions) -> FileDeclarations {
    FileDeclarations {
        file_name: tree.file_name.clone(),
        root: DeclarationTreeBuilder::for_tree(tree, options),
    }
}

/// Build every tree in parallel.
pub fn build_trees_parallel(
    trees: &[SyntaxTree],
    options: &DeclarationOptions,
) -> Vec<FileDeclarations> {
    trees
        .par_iter()
        .map(|tree| build_file(tree, options))
        .collect()
}

/// Build every tree in parallel and total up the results.
pub fn build_trees_with_stats(
    trees: &[SyntaxTree],
    options: &DeclarationOptions,
) -> (Vec<FileDeclarations>, BuildStats) {
    let results = build_trees_parallel(trees, options);
    let stats = BuildStats::from_results(&results);
    debug!(?stats, "batch built");
    (results, stats)
}

impl BuildStats {
    #[must_use]
    pub fn from_results(results: &[FileDeclarations]) -> Self {
        let mut stats = BuildStats {
            file_count: results.len(),
            ..BuildStats::default()
        };
        for file in results {
            let Ok(root) = &file.root else {
                stats.failed_files += 1;
                continue;
            };
            let diagnostics = root.all_diagnostics();
            stats.declaration_count += root.declaration_count();
            stats.diagnostic_count += diagnostics.len();
            stats.error_count += diagnostics.iter().filter(|d| d.is_error()).count();
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csz_syntax::SyntaxFactory;
    use csz_syntax::tree::ParseOptions;

    fn class_file(name: &str) -> SyntaxTree {
        let mut f = SyntaxFactory::new();
        let class = f.class(name, vec![]);
        let root = f.compilation_unit_of(vec![class]);
        f.finish(root, &format!("{name}.cs"), ParseOptions::default())
    }

    #[test]
    fn test_parallel_results_keep_input_order() {
        let trees: Vec<_> = (0..20).map(|i| class_file(&format!("C{i}"))).collect();
        let results = build_trees_parallel(&trees, &DeclarationOptions::default());

        assert_eq!(results.len(), 20);
        for (i, file) in results.iter().enumerate() {
            assert_eq!(file.file_name, format!("C{i}.cs"));
            let root = file.root.as_ref().expect("class file should build");
            assert_eq!(root.children[0].name(), format!("C{i}"));
        }
    }

    #[test]
    fn test_stats_count_declarations() {
        let trees = vec![class_file("A"), class_file("B")];
        let (_, stats) = build_trees_with_stats(&trees, &DeclarationOptions::default());

        assert_eq!(stats.file_count, 2);
        assert_eq!(stats.declaration_count, 2);
        assert_eq!(stats.diagnostic_count, 0);
        assert_eq!(stats.error_count, 0);
        assert_eq!(stats.failed_files, 0);
    }
}
