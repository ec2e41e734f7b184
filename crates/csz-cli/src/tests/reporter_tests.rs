use super::reporter::{Reporter, render_json};
use csz_common::TreeId;
use csz_common::diagnostics::diagnostic_codes;
use csz_declarations::parallel::{BuildStats, FileDeclarations, build_file};
use csz_declarations::{DeclarationError, DeclarationOptions};
use csz_syntax::node::{CompilationUnitData, TypeDeclarationData};
use csz_syntax::{ParseOptions, SyntaxFactory, SyntaxKind, SyntaxTree};

/// `namespace App { public partial class Box<K, V> { int b, a; void Run(); } }`
fn app_tree() -> SyntaxTree {
    let mut f = SyntaxFactory::new();
    let field = f.field(&["b", "a"]);
    let method = f.method("Run", vec![]);
    let modifiers = f.modifiers(&[SyntaxKind::PublicKeyword, SyntaxKind::PartialKeyword]);
    let identifier = f.identifier("Box");
    let type_parameters = f.type_parameters(&["K", "V"]);
    let class = f.type_declaration(
        SyntaxKind::ClassDeclaration,
        TypeDeclarationData {
            modifiers,
            identifier,
            type_parameters: Some(type_parameters),
            members: vec![field, method].into(),
            ..TypeDeclarationData::default()
        },
    );
    let ns = f.namespace("App", vec![class]);
    let root = f.compilation_unit_of(vec![ns]);
    f.finish(root, "App.cs", ParseOptions::default())
}

fn out_of_order_usings() -> SyntaxTree {
    let mut f = SyntaxFactory::new();
    let using = f.using("System");
    let global = f.global_using("System.IO");
    let root = f.compilation_unit(CompilationUnitData {
        usings: vec![using, global].into(),
        ..CompilationUnitData::default()
    });
    f.finish(root, "Usings.cs", ParseOptions::default())
}

#[test]
fn test_outline_without_color() {
    let file = build_file(&app_tree(), &DeclarationOptions::default());
    let text = Reporter::new(false).render_file(&file);

    assert_eq!(
        text,
        "App.cs\n  namespace App\n    class Box<,> [public partial] { Run, a, b }\n"
    );
}

#[test]
fn test_outline_lists_diagnostics() {
    let file = build_file(&out_of_order_usings(), &DeclarationOptions::default());
    let text = Reporter::new(false).render_file(&file);

    let code = format!("error CS{}:", diagnostic_codes::GLOBAL_USING_OUT_OF_ORDER);
    assert!(text.starts_with("Usings.cs\n"));
    assert!(text.contains(&code), "{text}");
}

#[test]
fn test_failed_file_shows_error() {
    let file = FileDeclarations {
        file_name: "Broken.cs".to_string(),
        root: Err(DeclarationError::RootNotCompilationUnit {
            tree: TreeId(3),
            node: 0,
            found: Some(SyntaxKind::ClassDeclaration),
        }),
    };
    let text = Reporter::new(false).render_file(&file);

    assert!(text.starts_with("Broken.cs\n  error: "));
    assert!(text.contains("expected a compilation unit"));
}

#[test]
fn test_stats_line() {
    let reporter = Reporter::new(false);
    let stats = BuildStats {
        file_count: 2,
        declaration_count: 5,
        diagnostic_count: 1,
        error_count: 1,
        failed_files: 0,
    };
    assert_eq!(
        reporter.render_stats(&stats),
        "2 files, 5 declarations, 1 diagnostics (1 errors)"
    );

    let stats = BuildStats {
        failed_files: 1,
        ..stats
    };
    assert!(reporter.render_stats(&stats).ends_with(", 1 failed"));
}

#[test]
fn test_json_document() {
    let files = vec![
        build_file(&app_tree(), &DeclarationOptions::default()),
        build_file(&out_of_order_usings(), &DeclarationOptions::default()),
    ];
    let stats = BuildStats::from_results(&files);
    let text = render_json(&files, &stats).expect("serializable");
    let json: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");

    let app = &json["files"][0];
    assert_eq!(app["file"], "App.cs");
    assert_eq!(app["declarations"]["children"][0]["name"], "App");
    assert_eq!(
        app["declarations"]["children"][0]["children"][0]["arity"],
        2
    );
    assert_eq!(app["diagnostics"], serde_json::json!([]));

    let usings = &json["files"][1];
    assert_eq!(usings["diagnostics"][0]["code"], "CS8915");
    assert_eq!(usings["diagnostics"][0]["category"], "error");

    assert_eq!(json["stats"]["files"], 2);
    assert_eq!(json["stats"]["errors"], 1);
}
