use jx_diagnostic::ErrorCode;
use jx_ir::{ExprKind, LiteralKind, PrimitiveType, StmtKind, TypeRef};
use pretty_assertions::assert_eq;

use super::{expr, parse_expr, parse_source, shape};

#[test]
fn local_declarations() {
    let output = parse_source("int x = 1; long y; String s = \"a\";");
    assert!(output.errors.is_empty());
    let kinds: Vec<_> = output
        .unit
        .stmts
        .iter()
        .map(|s| match &s.kind {
            StmtKind::Local { ty, name, init, .. } => {
                (ty.clone(), name.as_str().to_string(), init.is_some())
            }
            StmtKind::Expr(_) => panic!("expected declaration"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            (TypeRef::INT, "x".to_string(), true),
            (TypeRef::LONG, "y".to_string(), false),
            (TypeRef::string(), "s".to_string(), true),
        ]
    );
}

#[test]
fn statement_spans_include_semicolon() {
    let source = "  int x = 1 ;\nx = 2;";
    let output = parse_source(source);
    let spans: Vec<_> = output.unit.stmts.iter().map(|s| s.span.to_range()).collect();
    assert_eq!(spans, vec![2..13, 14..20]);
}

#[test]
fn literals() {
    for (source, kind) in [
        ("1", LiteralKind::Int),
        ("1L", LiteralKind::Long),
        ("1.0f", LiteralKind::Float),
        ("1.0", LiteralKind::Double),
        ("'a'", LiteralKind::Char),
        ("\"s\"", LiteralKind::String),
        ("true", LiteralKind::Bool),
        ("null", LiteralKind::Null),
    ] {
        let (output, id) = parse_expr(source);
        assert_eq!(expr(&output, id).kind, ExprKind::Literal(kind), "{source}");
    }
}

#[test]
fn unary_and_casts() {
    assert_eq!(shape("-x"), "(- x)");
    assert_eq!(shape("!~x"), "(! (~ x))");
    assert_eq!(shape("(int) x >>> 2"), "(>>> (cast int x) 2)");
    assert_eq!(shape("(byte) -x"), "(cast byte (- x))");
    assert_eq!(shape("(x) + 1"), "(+ (paren x) 1)");
}

#[test]
fn cast_records_type_span() {
    let (output, id) = parse_expr("(short) y");
    let ExprKind::Cast { ty, ty_span, .. } = &expr(&output, id).kind else {
        panic!("expected cast");
    };
    assert_eq!(*ty, TypeRef::Primitive(PrimitiveType::Short));
    assert_eq!(ty_span.to_range(), 1..6);
}

#[test]
fn parenthesized_assignment_target() {
    assert_eq!(shape("(x) = 1"), "(= (paren x) 1)");
}

#[test]
fn invalid_assignment_target() {
    let output = parse_source("1 = x;");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code(), ErrorCode::E1005);
}

#[test]
fn missing_semicolon() {
    let output = parse_source("x = 1");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code(), ErrorCode::E1001);
}

#[test]
fn expected_expression() {
    let output = parse_source("x = ;");
    assert_eq!(output.errors[0].code(), ErrorCode::E1002);
}

#[test]
fn unclosed_paren() {
    let output = parse_source("x = (a + b;");
    assert_eq!(output.errors[0].code(), ErrorCode::E1003);
    assert_eq!(output.errors[0].span.to_range(), 10..11);
}

#[test]
fn expected_identifier_after_type() {
    let output = parse_source("int = 3;");
    assert_eq!(output.errors[0].code(), ErrorCode::E1004);
}

#[test]
fn recovery_continues_after_semicolon() {
    let output = parse_source("x = ; int y = 2; z = (1;");
    let codes: Vec<_> = output.errors.iter().map(crate::ParseError::code).collect();
    assert_eq!(codes, vec![ErrorCode::E1002, ErrorCode::E1003]);
    assert_eq!(output.unit.stmts.len(), 1);
    assert!(matches!(output.unit.stmts[0].kind, StmtKind::Local { .. }));
}

#[test]
fn empty_source() {
    let output = parse_source("");
    assert!(output.unit.stmts.is_empty());
    assert!(output.errors.is_empty());
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let (output, _) = parse_expr(&source);
    assert_eq!(output.arena.len(), depth + 1);
}
