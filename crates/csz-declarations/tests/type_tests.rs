use csz_common::LanguageVersion;
use csz_common::diagnostics::diagnostic_codes;
use csz_declarations::member_names::{
    CONSTRUCTOR_NAME, DESTRUCTOR_NAME, INDEXER_NAME, STATIC_CONSTRUCTOR_NAME,
};
use csz_declarations::{
    DeclarationError, DeclarationKind, DeclarationModifiers, DeclarationOptions,
    DeclarationTreeBuilder, RootNamespaceDeclaration, TypeDeclaration, TypeDeclarationFlags,
};
use csz_syntax::node::{DelegateData, EnumData, PropertyData, TypeDeclarationData};
use csz_syntax::{NodeIndex, NodeList, ParseOptions, SyntaxFactory, SyntaxKind, SyntaxTree};

fn finish(f: SyntaxFactory, root: NodeIndex) -> SyntaxTree {
    f.finish(root, "test.cs", ParseOptions::default())
}

fn build(tree: &SyntaxTree) -> RootNamespaceDeclaration {
    DeclarationTreeBuilder::for_tree(tree, &DeclarationOptions::default())
        .expect("declaration tree should build")
}

fn only_type(result: &RootNamespaceDeclaration) -> &TypeDeclaration {
    assert_eq!(result.children.len(), 1, "expected a single root child");
    result.children[0].as_type().expect("root child should be a type")
}

/// Build a file holding one type declaration with the given modifiers.
fn type_with_modifiers(
    kind: SyntaxKind,
    modifiers: &[SyntaxKind],
    version: LanguageVersion,
) -> (SyntaxTree, NodeList) {
    let mut f = SyntaxFactory::new();
    let modifiers = f.modifiers(modifiers);
    let identifier = f.identifier("T");
    let ty = f.type_declaration(
        kind,
        TypeDeclarationData {
            modifiers: modifiers.clone(),
            identifier,
            ..TypeDeclarationData::default()
        },
    );
    let root = f.compilation_unit_of(vec![ty]);
    let tree = f.finish(
        root,
        "test.cs",
        ParseOptions::default().with_language_version(version),
    );
    (tree, modifiers)
}

#[test]
fn test_single_class_file() {
    let mut f = SyntaxFactory::new();
    let class = f.class("C", vec![]);
    let root = f.compilation_unit_of(vec![class]);
    let tree = finish(f, root);
    let result = build(&tree);

    let c = only_type(&result);
    assert_eq!(c.kind, DeclarationKind::Class);
    assert_eq!(c.name, "C");
    assert_eq!(c.arity, 0);
    assert!(c.member_names.is_empty());
    assert!(!c.has_flag(TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS));
    assert!(c.diagnostics.is_empty());
    assert!(c.children.is_empty());
    assert_eq!(tree.resolve_kind(&c.syntax_reference), Some(SyntaxKind::ClassDeclaration));
}

#[test]
fn test_type_kinds_map_from_syntax() {
    let kinds = [
        (SyntaxKind::ClassDeclaration, DeclarationKind::Class),
        (SyntaxKind::StructDeclaration, DeclarationKind::Struct),
        (SyntaxKind::InterfaceDeclaration, DeclarationKind::Interface),
        (SyntaxKind::RecordDeclaration, DeclarationKind::Record),
        (SyntaxKind::RecordStructDeclaration, DeclarationKind::RecordStruct),
    ];
    for (syntax, expected) in kinds {
        let mut f = SyntaxFactory::new();
        let ty = f.simple_type(syntax, "T", vec![]);
        let root = f.compilation_unit_of(vec![ty]);
        let result = build(&finish(f, root));
        assert_eq!(only_type(&result).kind, expected, "{syntax:?}");
    }
}

#[test]
fn test_member_names_use_metadata_names() {
    let mut f = SyntaxFactory::new();
    let members = vec![
        f.field(&["a", "b"]),
        f.event_field(&["Changed"]),
        f.method("M", vec![]),
        f.method("M", vec![]),
        f.property("P"),
        f.event("Clicked"),
        f.constructor("C", false),
        f.constructor("C", true),
        f.destructor("C"),
        f.indexer(),
        f.operator(SyntaxKind::PlusToken, 2),
        f.operator(SyntaxKind::MinusToken, 1),
        f.checked_operator(SyntaxKind::PlusToken, 2),
        f.conversion_operator(SyntaxKind::ImplicitKeyword, false),
        f.conversion_operator(SyntaxKind::ExplicitKeyword, true),
        f.explicit_interface_method("IDisposable", "Dispose"),
    ];
    let class = f.class("C", members);
    let root = f.compilation_unit_of(vec![class]);
    let result = build(&finish(f, root));

    let c = only_type(&result);
    let mut expected = vec![
        "a",
        "b",
        "Changed",
        "M",
        "P",
        "Clicked",
        CONSTRUCTOR_NAME,
        STATIC_CONSTRUCTOR_NAME,
        DESTRUCTOR_NAME,
        INDEXER_NAME,
        "op_Addition",
        "op_UnaryNegation",
        "op_CheckedAddition",
        "op_Implicit",
        "op_CheckedExplicit",
    ];
    expected.sort_unstable();
    assert_eq!(c.sorted_member_names(), expected);
    assert!(
        !c.has_member_named("Dispose"),
        "explicit interface implementations are not looked up by name"
    );
    assert!(c.has_flag(TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS));
}

#[test]
fn test_member_flags() {
    let mut f = SyntaxFactory::new();
    let this_param = f.parameter_with(&[SyntaxKind::ThisKeyword], "s");
    let extension = f.method("Ext", vec![this_param]);
    let required = f.field_with(
        SyntaxKind::FieldDeclaration,
        &[SyntaxKind::PublicKeyword, SyntaxKind::RequiredKeyword],
        &["Id"],
    );
    let attributes = f.attribute_list(None, &["NotNull"]);
    let getter = f.accessor(SyntaxKind::GetKeyword, vec![attributes].into());
    let type_node = f.predefined_type("int");
    let identifier = f.identifier("Value");
    let property = f.property_with(
        SyntaxKind::PropertyDeclaration,
        PropertyData {
            type_node,
            identifier,
            accessors: Some(vec![getter].into()),
            ..PropertyData::default()
        },
    );
    let class = f.class("C", vec![extension, required, property]);
    let root = f.compilation_unit_of(vec![class]);
    let result = build(&finish(f, root));

    let c = only_type(&result);
    assert!(c.has_flag(TypeDeclarationFlags::HAS_EXTENSION_METHOD_SYNTAX));
    assert!(c.has_flag(TypeDeclarationFlags::HAS_REQUIRED_MEMBERS));
    assert!(
        c.has_flag(TypeDeclarationFlags::ANY_MEMBER_HAS_ATTRIBUTES),
        "accessor attributes count as member attributes"
    );
    assert!(!c.has_flag(TypeDeclarationFlags::HAS_ANY_ATTRIBUTES));
}

#[test]
fn test_nested_types_become_children_and_namespaces_are_dropped() {
    let mut f = SyntaxFactory::new();
    let inner = f.class("Inner", vec![]);
    let callback = f.delegate("Callback");
    let kind = f.enum_declaration("Kind", &["A"]);
    let stray = f.namespace("Stray", vec![]);
    let field = f.field(&["f"]);
    let outer = f.class("Outer", vec![inner, field, stray, callback, kind]);
    let root = f.compilation_unit_of(vec![outer]);
    let result = build(&finish(f, root));

    let outer = only_type(&result);
    let children: Vec<(&str, DeclarationKind)> = outer
        .children
        .iter()
        .map(|child| (child.name.as_str(), child.kind))
        .collect();
    assert_eq!(
        children,
        vec![
            ("Inner", DeclarationKind::Class),
            ("Callback", DeclarationKind::Delegate),
            ("Kind", DeclarationKind::Enum),
        ]
    );
    assert_eq!(outer.sorted_member_names(), vec!["f"]);
    assert!(result.find_type("Outer.Inner").is_some());
}

#[test]
fn test_primary_constructor_counts_as_non_type_member() {
    let mut f = SyntaxFactory::new();
    let parameter = f.parameter("X");
    let identifier = f.identifier("Point");
    let record = f.type_declaration(
        SyntaxKind::RecordDeclaration,
        TypeDeclarationData {
            identifier,
            parameter_list: Some(vec![parameter].into()),
            ..TypeDeclarationData::default()
        },
    );
    let root = f.compilation_unit_of(vec![record]);
    let result = build(&finish(f, root));

    let point = only_type(&result);
    assert_eq!(point.kind, DeclarationKind::Record);
    assert!(point.has_flag(TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS));
    assert!(point.member_names.is_empty());
}

#[test]
fn test_generic_arity_and_constraints() {
    let mut f = SyntaxFactory::new();
    let type_parameters = f.type_parameters(&["K", "V"]);
    let clause = f.constraint_clause("K", "IComparable");
    let identifier = f.identifier("Map");
    let generic = f.type_declaration(
        SyntaxKind::ClassDeclaration,
        TypeDeclarationData {
            identifier,
            type_parameters: Some(type_parameters),
            constraint_clauses: vec![clause].into(),
            ..TypeDeclarationData::default()
        },
    );
    let root = f.compilation_unit_of(vec![generic]);
    let result = build(&finish(f, root));

    let map = only_type(&result);
    assert_eq!(map.arity, 2);
    assert!(map.diagnostics.is_empty());
}

#[test]
fn test_constraints_on_non_generic_type_are_reported() {
    let mut f = SyntaxFactory::new();
    let first = f.constraint_clause("T", "class");
    let second = f.constraint_clause("U", "struct");
    let identifier = f.identifier("C");
    let class = f.type_declaration(
        SyntaxKind::ClassDeclaration,
        TypeDeclarationData {
            identifier,
            constraint_clauses: vec![first, second].into(),
            ..TypeDeclarationData::default()
        },
    );
    let root = f.compilation_unit_of(vec![class]);
    let tree = finish(f, root);
    let result = build(&tree);

    let c = only_type(&result);
    assert_eq!(c.diagnostics.len(), 1);
    assert_eq!(
        c.diagnostics[0].code,
        diagnostic_codes::CONSTRAINT_ONLY_ALLOWED_ON_GENERIC_DECL
    );
    assert_eq!(c.diagnostics[0].location, tree.location(first));
}

#[test]
fn test_attributes_and_base_list_flags() {
    let mut f = SyntaxFactory::new();
    let attributes = f.attribute_list(None, &["Serializable"]);
    let base_list = f.base_list(&["Base", "IThing"]);
    let identifier = f.identifier("C");
    let class = f.type_declaration(
        SyntaxKind::ClassDeclaration,
        TypeDeclarationData {
            attribute_lists: vec![attributes].into(),
            identifier,
            base_list: Some(base_list),
            ..TypeDeclarationData::default()
        },
    );
    let root = f.compilation_unit_of(vec![class]);
    let result = build(&finish(f, root));

    let c = only_type(&result);
    assert!(c.has_flag(TypeDeclarationFlags::HAS_ANY_ATTRIBUTES));
    assert!(c.has_flag(TypeDeclarationFlags::HAS_BASE_DECLARATIONS));
    assert!(!c.has_flag(TypeDeclarationFlags::ANY_MEMBER_HAS_ATTRIBUTES));
}

#[test]
fn test_missing_identifier_gives_empty_name() {
    let mut f = SyntaxFactory::new();
    let class = f.type_declaration(SyntaxKind::ClassDeclaration, TypeDeclarationData::default());
    let root = f.compilation_unit_of(vec![class]);
    let result = build(&finish(f, root));

    assert_eq!(only_type(&result).name, "");
}

#[test]
fn test_modifiers_are_converted() {
    let (tree, _) = type_with_modifiers(
        SyntaxKind::ClassDeclaration,
        &[
            SyntaxKind::ProtectedKeyword,
            SyntaxKind::InternalKeyword,
            SyntaxKind::StaticKeyword,
            SyntaxKind::PartialKeyword,
        ],
        LanguageVersion::LATEST,
    );
    let result = build(&tree);

    let t = only_type(&result);
    assert_eq!(
        t.modifiers,
        DeclarationModifiers::PROTECTED_INTERNAL
            | DeclarationModifiers::STATIC
            | DeclarationModifiers::PARTIAL
    );
    assert!(t.diagnostics.is_empty());
}

#[test]
fn test_private_protected_is_one_accessibility() {
    let (tree, _) = type_with_modifiers(
        SyntaxKind::ClassDeclaration,
        &[SyntaxKind::PrivateKeyword, SyntaxKind::ProtectedKeyword],
        LanguageVersion::LATEST,
    );
    let result = build(&tree);
    assert_eq!(only_type(&result).modifiers, DeclarationModifiers::PRIVATE_PROTECTED);
}

#[test]
fn test_partial_must_be_last_modifier() {
    let (tree, modifiers) = type_with_modifiers(
        SyntaxKind::ClassDeclaration,
        &[SyntaxKind::PartialKeyword, SyntaxKind::PublicKeyword],
        LanguageVersion::LATEST,
    );
    let result = build(&tree);

    let t = only_type(&result);
    assert_eq!(t.diagnostics.len(), 1);
    assert_eq!(t.diagnostics[0].code, diagnostic_codes::PARTIAL_MISPLACED);
    assert_eq!(
        t.diagnostics[0].location,
        tree.location(modifiers.first().expect("partial token"))
    );
    assert!(t.modifiers.contains(DeclarationModifiers::PARTIAL | DeclarationModifiers::PUBLIC));
}

#[test]
fn test_duplicate_modifier_is_reported_once() {
    let (tree, _) = type_with_modifiers(
        SyntaxKind::ClassDeclaration,
        &[
            SyntaxKind::PublicKeyword,
            SyntaxKind::PublicKeyword,
            SyntaxKind::SealedKeyword,
            SyntaxKind::SealedKeyword,
        ],
        LanguageVersion::LATEST,
    );
    let result = build(&tree);

    let t = only_type(&result);
    assert_eq!(t.diagnostics.len(), 1);
    assert_eq!(t.diagnostics[0].code, diagnostic_codes::DUPLICATE_MODIFIER);
    assert_eq!(t.diagnostics[0].message(), "Duplicate 'public' modifier");
    assert_eq!(
        t.modifiers,
        DeclarationModifiers::PUBLIC | DeclarationModifiers::SEALED
    );
}

#[test]
fn test_static_and_partial_classes_need_csharp_2() {
    let (tree, modifiers) = type_with_modifiers(
        SyntaxKind::ClassDeclaration,
        &[SyntaxKind::StaticKeyword, SyntaxKind::PartialKeyword],
        LanguageVersion::CSharp1,
    );
    let result = build(&tree);
    let t = only_type(&result);

    let tokens: Vec<NodeIndex> = modifiers.iter().collect();
    assert_eq!(t.diagnostics.len(), 2);
    assert!(
        t.diagnostics
            .iter()
            .all(|d| d.code == diagnostic_codes::FEATURE_NOT_AVAILABLE_IN_VERSION)
    );
    assert_eq!(t.diagnostics[0].location, tree.location(tokens[1]));
    assert_eq!(
        t.diagnostics[0].message(),
        "Feature 'partial types' is not available in C# 1. Please use language version 2 or greater."
    );
    assert_eq!(t.diagnostics[1].location, tree.location(tokens[0]));
    assert!(t.diagnostics[1].message().contains("static classes"));
}

#[test]
fn test_repeated_partial_reports_feature_once() {
    let (tree, modifiers) = type_with_modifiers(
        SyntaxKind::ClassDeclaration,
        &[SyntaxKind::PartialKeyword, SyntaxKind::PartialKeyword],
        LanguageVersion::CSharp1,
    );
    let result = build(&tree);
    let t = only_type(&result);

    let tokens: Vec<NodeIndex> = modifiers.iter().collect();
    let reported: Vec<(u32, _)> = t
        .diagnostics
        .iter()
        .map(|d| (d.code, d.location))
        .collect();
    assert_eq!(
        reported,
        vec![
            (diagnostic_codes::FEATURE_NOT_AVAILABLE_IN_VERSION, tree.location(tokens[0])),
            (diagnostic_codes::PARTIAL_MISPLACED, tree.location(tokens[0])),
            (diagnostic_codes::DUPLICATE_MODIFIER, tree.location(tokens[1])),
        ]
    );
    assert_eq!(t.modifiers, DeclarationModifiers::PARTIAL);
}

#[test]
fn test_readonly_and_ref_structs_need_csharp_7_2() {
    let (tree, _) = type_with_modifiers(
        SyntaxKind::StructDeclaration,
        &[SyntaxKind::ReadOnlyKeyword, SyntaxKind::RefKeyword],
        LanguageVersion::CSharp7_1,
    );
    let result = build(&tree);
    let messages: Vec<String> = only_type(&result)
        .diagnostics
        .iter()
        .map(|d| d.message())
        .collect();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("readonly structs"));
    assert!(messages[1].contains("ref structs"));

    let (tree, _) = type_with_modifiers(
        SyntaxKind::StructDeclaration,
        &[SyntaxKind::ReadOnlyKeyword, SyntaxKind::RefKeyword],
        LanguageVersion::CSharp7_2,
    );
    assert!(only_type(&build(&tree)).diagnostics.is_empty());
}

#[test]
fn test_version_gates_only_apply_to_matching_kinds() {
    // `static` on a struct is not gated here; it is not a static class.
    let (tree, _) = type_with_modifiers(
        SyntaxKind::StructDeclaration,
        &[SyntaxKind::StaticKeyword],
        LanguageVersion::CSharp1,
    );
    assert!(only_type(&build(&tree)).diagnostics.is_empty());

    // `readonly` on a class is not a readonly struct.
    let (tree, _) = type_with_modifiers(
        SyntaxKind::ClassDeclaration,
        &[SyntaxKind::ReadOnlyKeyword],
        LanguageVersion::CSharp7,
    );
    assert!(only_type(&build(&tree)).diagnostics.is_empty());

    let (tree, _) = type_with_modifiers(
        SyntaxKind::RecordStructDeclaration,
        &[SyntaxKind::ReadOnlyKeyword],
        LanguageVersion::CSharp7,
    );
    assert_eq!(only_type(&build(&tree)).diagnostics.len(), 1);
}

#[test]
fn test_file_types_need_csharp_11() {
    let (tree, _) = type_with_modifiers(
        SyntaxKind::ClassDeclaration,
        &[SyntaxKind::FileKeyword],
        LanguageVersion::CSharp10,
    );
    let result = build(&tree);
    let t = only_type(&result);
    assert_eq!(t.diagnostics.len(), 1);
    assert!(t.diagnostics[0].message().contains("file types"));
    assert!(t.modifiers.contains(DeclarationModifiers::FILE));
}

#[test]
fn test_delegate_declaration() {
    let mut f = SyntaxFactory::new();
    let return_type = f.predefined_type("void");
    let identifier = f.identifier("Handler");
    let type_parameters = f.type_parameters(&["T"]);
    let clause = f.constraint_clause("T", "class");
    let attributes = f.attribute_list(None, &["Obsolete"]);
    let modifiers = f.modifiers(&[SyntaxKind::PublicKeyword]);
    let delegate = f.delegate_with(DelegateData {
        attribute_lists: vec![attributes].into(),
        modifiers,
        return_type,
        identifier,
        type_parameters: Some(type_parameters),
        constraint_clauses: vec![clause].into(),
        ..DelegateData::default()
    });
    let root = f.compilation_unit_of(vec![delegate]);
    let result = build(&finish(f, root));

    let handler = only_type(&result);
    assert_eq!(handler.kind, DeclarationKind::Delegate);
    assert_eq!(handler.name, "Handler");
    assert_eq!(handler.arity, 1);
    assert_eq!(handler.modifiers, DeclarationModifiers::PUBLIC);
    assert!(handler.member_names.is_empty());
    assert!(handler.has_flag(TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS));
    assert!(handler.has_flag(TypeDeclarationFlags::HAS_ANY_ATTRIBUTES));
    assert!(handler.diagnostics.is_empty());
}

#[test]
fn test_non_generic_delegate_with_constraint_is_reported() {
    let mut f = SyntaxFactory::new();
    let return_type = f.predefined_type("void");
    let identifier = f.identifier("Handler");
    let clause = f.constraint_clause("T", "class");
    let delegate = f.delegate_with(DelegateData {
        return_type,
        identifier,
        constraint_clauses: vec![clause].into(),
        ..DelegateData::default()
    });
    let root = f.compilation_unit_of(vec![delegate]);
    let result = build(&finish(f, root));

    let handler = only_type(&result);
    assert_eq!(handler.diagnostics.len(), 1);
    assert_eq!(
        handler.diagnostics[0].code,
        diagnostic_codes::CONSTRAINT_ONLY_ALLOWED_ON_GENERIC_DECL
    );
}

#[test]
fn test_enum_color() {
    let mut f = SyntaxFactory::new();
    let color = f.enum_declaration("Color", &["Red", "Green", "Blue"]);
    let root = f.compilation_unit_of(vec![color]);
    let result = build(&finish(f, root));

    let color = only_type(&result);
    assert_eq!(color.kind, DeclarationKind::Enum);
    assert_eq!(color.sorted_member_names(), vec!["Blue", "Green", "Red"]);
    assert!(color.has_flag(TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS));
    assert!(!color.has_flag(TypeDeclarationFlags::HAS_BASE_DECLARATIONS));
    assert!(!color.has_flag(TypeDeclarationFlags::ANY_MEMBER_HAS_ATTRIBUTES));
}

#[test]
fn test_enum_with_underlying_type_and_member_attributes() {
    let mut f = SyntaxFactory::new();
    let attributes = f.attribute_list(None, &["Obsolete"]);
    let old = f.enum_member("Old", vec![attributes].into());
    let new = f.enum_member("New", NodeList::new());
    let identifier = f.identifier("Version");
    let base_list = f.base_list(&["byte"]);
    let version = f.enum_with(EnumData {
        identifier,
        base_list: Some(base_list),
        members: vec![old, new].into(),
        ..EnumData::default()
    });
    let root = f.compilation_unit_of(vec![version]);
    let result = build(&finish(f, root));

    let version = only_type(&result);
    assert!(version.has_flag(TypeDeclarationFlags::HAS_BASE_DECLARATIONS));
    assert!(version.has_flag(TypeDeclarationFlags::ANY_MEMBER_HAS_ATTRIBUTES));
    assert_eq!(version.arity, 0);
}

#[test]
fn test_empty_enum_has_no_non_type_members() {
    let mut f = SyntaxFactory::new();
    let empty = f.enum_declaration("Empty", &[]);
    let root = f.compilation_unit_of(vec![empty]);
    let result = build(&finish(f, root));

    let empty = only_type(&result);
    assert!(empty.member_names.is_empty());
    assert!(!empty.has_flag(TypeDeclarationFlags::HAS_ANY_NONTYPE_MEMBERS));
}

#[test]
fn test_statement_in_type_member_list_is_an_error() {
    let mut f = SyntaxFactory::new();
    let block = f.block(vec![]);
    let class = f.class("C", vec![block]);
    let root = f.compilation_unit_of(vec![class]);
    let tree = finish(f, root);

    let err = DeclarationTreeBuilder::for_tree(&tree, &DeclarationOptions::default())
        .expect_err("a block is not a member");
    assert!(
        matches!(
            err,
            DeclarationError::UnexpectedMemberKind {
                kind: SyntaxKind::Block,
                container: SyntaxKind::ClassDeclaration,
                ..
            }
        ),
        "unexpected error: {err}"
    );
}
