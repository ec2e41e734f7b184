use csz_common::diagnostics::diagnostic_codes;
use csz_declarations::{
    DeclarationKind, DeclarationModifiers, DeclarationOptions, DeclarationTreeBuilder,
    IMPLICIT_CLASS_NAME, RootNamespaceDeclaration, SIMPLE_PROGRAM_NAME, TypeDeclaration,
    TypeDeclarationFlags,
};
use csz_syntax::{NodeIndex, ParseOptions, SyntaxFactory, SyntaxKind, SyntaxTree};

fn finish(f: SyntaxFactory, root: NodeIndex) -> SyntaxTree {
    f.finish(root, "Program.cs", ParseOptions::default())
}

fn build(tree: &SyntaxTree) -> RootNamespaceDeclaration {
    DeclarationTreeBuilder::for_tree(tree, &DeclarationOptions::default())
        .expect("declaration tree should build")
}

fn program(result: &RootNamespaceDeclaration) -> &TypeDeclaration {
    result
        .children
        .iter()
        .filter_map(|child| child.as_type())
        .find(|ty| ty.kind == DeclarationKind::SimpleProgram)
        .expect("top-level program")
}

/// Build a file whose members are the given statements, each wrapped in a
/// global statement.
fn program_flags(build_statements: impl FnOnce(&mut SyntaxFactory) -> Vec<NodeIndex>) -> TypeDeclarationFlags {
    let mut f = SyntaxFactory::new();
    let statements = build_statements(&mut f);
    let globals: Vec<NodeIndex> = statements
        .into_iter()
        .map(|statement| f.global_statement(statement))
        .collect();
    let root = f.compilation_unit_of(globals);
    program(&build(&finish(f, root))).flags
}

#[test]
fn test_statements_only_file_yields_program() {
    let mut f = SyntaxFactory::new();
    let first = f.call_statement("Console.WriteLine");
    let first = f.global_statement(first);
    let second = f.call_statement("Run");
    let second = f.global_statement(second);
    let root = f.compilation_unit_of(vec![first, second]);
    let tree = finish(f, root);
    let result = build(&tree);

    assert_eq!(result.children.len(), 1);
    let program = program(&result);
    assert_eq!(program.name, SIMPLE_PROGRAM_NAME);
    assert_eq!(program.arity, 0);
    assert_eq!(program.modifiers, DeclarationModifiers::PARTIAL);
    assert!(program.member_names.is_empty());
    assert!(program.diagnostics.is_empty());
    assert!(program.has_flag(TypeDeclarationFlags::IS_SIMPLE_PROGRAM));
    assert_eq!(program.name_location, tree.location(first));
    assert_eq!(
        tree.resolve_kind(&program.syntax_reference),
        Some(SyntaxKind::CompilationUnit)
    );
}

#[test]
fn test_all_empty_statements_are_reported() {
    let mut f = SyntaxFactory::new();
    let first = f.empty_statement();
    let first = f.global_statement(first);
    let second = f.empty_statement();
    let second = f.global_statement(second);
    let root = f.compilation_unit_of(vec![first, second]);
    let tree = finish(f, root);
    let result = build(&tree);

    let program = program(&result);
    assert_eq!(program.diagnostics.len(), 1);
    assert_eq!(program.diagnostics[0].code, diagnostic_codes::SIMPLE_PROGRAM_IS_EMPTY);
    assert_eq!(program.diagnostics[0].location, tree.location(first));
}

#[test]
fn test_one_non_empty_statement_is_enough() {
    let mut f = SyntaxFactory::new();
    let empty = f.empty_statement();
    let empty = f.global_statement(empty);
    let call = f.call_statement("Run");
    let call = f.global_statement(call);
    let root = f.compilation_unit_of(vec![empty, call]);
    let result = build(&finish(f, root));

    assert!(program(&result).diagnostics.is_empty());
}

#[test]
fn test_await_sets_flag() {
    let flags = program_flags(|f| {
        let call = f.invocation("FetchAsync");
        let awaited = f.await_expression(call);
        vec![f.expression_statement(awaited)]
    });
    assert!(flags.contains(TypeDeclarationFlags::HAS_AWAIT_EXPRESSIONS));
    assert!(!flags.contains(TypeDeclarationFlags::IS_ITERATOR));
    assert!(!flags.contains(TypeDeclarationFlags::HAS_RETURN_WITH_EXPRESSION));
}

#[test]
fn test_await_foreach_and_await_using_set_flag() {
    let flags = program_flags(|f| {
        let body = f.block(vec![]);
        vec![f.await_foreach(body)]
    });
    assert!(flags.contains(TypeDeclarationFlags::HAS_AWAIT_EXPRESSIONS));

    let flags = program_flags(|f| vec![f.await_using_declaration()]);
    assert!(flags.contains(TypeDeclarationFlags::HAS_AWAIT_EXPRESSIONS));
}

#[test]
fn test_await_inside_lambda_does_not_count() {
    let flags = program_flags(|f| {
        let call = f.invocation("FetchAsync");
        let awaited = f.await_expression(call);
        let lambda = f.lambda(awaited);
        vec![f.expression_statement(lambda)]
    });
    assert!(!flags.contains(TypeDeclarationFlags::HAS_AWAIT_EXPRESSIONS));
}

#[test]
fn test_yield_marks_iterator() {
    let flags = program_flags(|f| {
        let value = f.literal();
        vec![f.yield_return(value), f.yield_break()]
    });
    assert!(flags.contains(TypeDeclarationFlags::IS_ITERATOR));
}

#[test]
fn test_return_with_expression_sets_flag() {
    let flags = program_flags(|f| {
        let value = f.literal();
        vec![f.return_statement(Some(value))]
    });
    assert!(flags.contains(TypeDeclarationFlags::HAS_RETURN_WITH_EXPRESSION));

    let flags = program_flags(|f| vec![f.return_statement(None)]);
    assert!(!flags.contains(TypeDeclarationFlags::HAS_RETURN_WITH_EXPRESSION));
}

#[test]
fn test_return_inside_local_function_does_not_count() {
    let flags = program_flags(|f| {
        let value = f.literal();
        let inner = f.return_statement(Some(value));
        vec![f.local_function(vec![inner])]
    });
    assert!(!flags.contains(TypeDeclarationFlags::HAS_RETURN_WITH_EXPRESSION));
}

#[test]
fn test_program_and_implicit_class_follow_declarations() {
    let mut f = SyntaxFactory::new();
    let statement = f.call_statement("Run");
    let statement = f.global_statement(statement);
    let method = f.method("Helper", vec![]);
    let class = f.class("C", vec![]);
    let root = f.compilation_unit_of(vec![statement, method, class]);
    let result = build(&finish(f, root));

    let names: Vec<&str> = result.children.iter().map(|child| child.name()).collect();
    assert_eq!(names, vec!["C", SIMPLE_PROGRAM_NAME, IMPLICIT_CLASS_NAME]);

    let implicit = result.children[2].as_type().expect("implicit class");
    assert_eq!(implicit.kind, DeclarationKind::ImplicitClass);
    assert_eq!(
        implicit.sorted_member_names(),
        vec!["Helper"],
        "global statements belong to the program, not the implicit class"
    );
}

#[test]
fn test_statements_do_not_make_implicit_class_non_empty() {
    let mut f = SyntaxFactory::new();
    let statement = f.call_statement("Run");
    let statement = f.global_statement(statement);
    let field = f.field(&["counter"]);
    let root = f.compilation_unit_of(vec![statement, field]);
    let result = build(&finish(f, root));

    assert_eq!(result.children.len(), 2);
    let implicit = result.children[1].as_type().expect("implicit class");
    assert_eq!(implicit.sorted_member_names(), vec!["counter"]);
    assert!(!implicit.has_flag(TypeDeclarationFlags::IS_SIMPLE_PROGRAM));
}
