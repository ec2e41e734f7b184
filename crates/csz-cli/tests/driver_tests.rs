use clap::Parser;
use csz_cli::args::CliArgs;
use csz_cli::config::ResolvedOptions;
use csz_cli::driver::{discover_inputs, load_tree, run};
use csz_common::{SourceCodeKind, TreeId};
use csz_declarations::{DEFAULT_SCRIPT_CLASS_NAME, DeclarationKind};
use csz_syntax::node::CompilationUnitData;
use csz_syntax::{ParseOptions, SyntaxFactory, SyntaxTree};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn class_tree(file_name: &str, class_name: &str) -> SyntaxTree {
    let mut f = SyntaxFactory::new();
    let field = f.field(&["value"]);
    let class = f.class(class_name, vec![field]);
    let root = f.compilation_unit_of(vec![class]);
    f.finish(root, file_name, ParseOptions::default())
}

fn out_of_order_tree() -> SyntaxTree {
    let mut f = SyntaxFactory::new();
    let using = f.using("System");
    let global = f.global_using("System.IO");
    let root = f.compilation_unit(CompilationUnitData {
        usings: vec![using, global].into(),
        ..CompilationUnitData::default()
    });
    f.finish(root, "Usings.cs", ParseOptions::default())
}

fn write_tree(dir: &Path, name: &str, tree: &SyntaxTree) -> PathBuf {
    let path = dir.join(name);
    let json = serde_json::to_string(tree).expect("serializable tree");
    std::fs::write(&path, json).expect("write tree");
    path
}

fn args(inputs: &[&Path], extra: &[&str]) -> CliArgs {
    let mut argv: Vec<String> = vec!["csz-decls".to_string()];
    argv.extend(inputs.iter().map(|p| p.display().to_string()));
    argv.extend(extra.iter().map(|s| s.to_string()));
    CliArgs::try_parse_from(argv).expect("valid args")
}

#[test]
fn test_discover_walks_directories_in_sorted_order() {
    let dir = TempDir::new().expect("temp dir");
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).expect("create nested dir");
    write_tree(dir.path(), "b.json", &class_tree("B.cs", "B"));
    write_tree(dir.path(), "a.json", &class_tree("A.cs", "A"));
    write_tree(&nested, "c.json", &class_tree("C.cs", "C"));
    std::fs::write(dir.path().join("notes.txt"), "ignored").expect("write notes");

    let found = discover_inputs(&[dir.path().to_path_buf()]).expect("discovery");
    let names: Vec<String> = found
        .iter()
        .map(|p| {
            p.strip_prefix(dir.path())
                .expect("inside dir")
                .display()
                .to_string()
        })
        .collect();
    let expected: Vec<String> = vec![
        "a.json".to_string(),
        "b.json".to_string(),
        Path::new("nested").join("c.json").display().to_string(),
    ];
    assert_eq!(names, expected);
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("missing.json");
    let error = discover_inputs(&[missing]).expect_err("missing input");
    assert!(error.to_string().contains("input not found"));
}

#[test]
fn test_load_tree_assigns_id_and_applies_overrides() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_tree(dir.path(), "a.json", &class_tree("", "A"));
    let options = ResolvedOptions {
        kind: Some(SourceCodeKind::Script),
        ..ResolvedOptions::default()
    };

    let tree = load_tree(&path, TreeId(7), &options).expect("loads");
    assert_eq!(tree.id, TreeId(7));
    assert_eq!(tree.options.kind, SourceCodeKind::Script);
    assert_eq!(tree.file_name, path.display().to_string());
}

#[test]
fn test_invalid_json_is_reported_with_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").expect("write");

    let error = load_tree(&path, TreeId(0), &ResolvedOptions::default()).expect_err("bad json");
    assert!(format!("{error:#}").contains("broken.json"));
}

#[test]
fn test_run_builds_every_file() {
    let dir = TempDir::new().expect("temp dir");
    write_tree(dir.path(), "a.json", &class_tree("A.cs", "A"));
    write_tree(dir.path(), "b.json", &out_of_order_tree());

    let result = run(&args(&[dir.path()], &[])).expect("run succeeds");

    assert_eq!(result.stats.file_count, 2);
    assert_eq!(result.files[0].file_name, "A.cs");
    assert_eq!(result.files[1].file_name, "Usings.cs");
    assert_eq!(result.stats.declaration_count, 1);
    assert_eq!(result.stats.error_count, 1);
    assert!(result.has_errors());
    assert!(!result.has_failures());

    let second = result.files[1].root.as_ref().expect("built");
    assert_eq!(second.name_location.tree, TreeId(1));
}

#[test]
fn test_run_with_script_override() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_tree(dir.path(), "a.json", &class_tree("A.csx", "A"));

    let result = run(&args(&[path.as_path()], &["--script"])).expect("run succeeds");
    let root = result.files[0].root.as_ref().expect("built");
    let script = root.children[0].as_type().expect("script class");
    assert_eq!(script.kind, DeclarationKind::Script);
    assert_eq!(script.name, DEFAULT_SCRIPT_CLASS_NAME);
    assert_eq!(script.children[0].name, "A");
}

#[test]
fn test_run_reads_config_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_tree(dir.path(), "a.json", &class_tree("A.csx", "A"));
    let config = dir.path().join("csz.json");
    std::fs::write(
        &config,
        r#"{ "submission": true, "scriptClassName": "Host.Submission#0" }"#,
    )
    .expect("write config");
    let config = config.display().to_string();

    let result =
        run(&args(&[path.as_path()], &["--config", config.as_str()])).expect("run succeeds");
    let root = result.files[0].root.as_ref().expect("built");
    let host = root.children[0].as_namespace().expect("Host namespace");
    assert_eq!(host.name, "Host");
    let submission = host.children[0].as_type().expect("submission class");
    assert_eq!(submission.kind, DeclarationKind::Submission);
    assert_eq!(submission.name, "Submission#0");
}

#[test]
fn test_run_with_empty_directory_fails() {
    let dir = TempDir::new().expect("temp dir");
    let error = run(&args(&[dir.path()], &[])).expect_err("nothing to do");
    assert!(error.to_string().contains("no syntax tree files"));
}
