#![allow(clippy::unwrap_used, clippy::expect_used)]

use jx_diagnostic::ErrorCode;
use jx_ir::{ExprId, ExprKind, PrimitiveType, StmtKind, TypeRef};
use pretty_assertions::assert_eq;

use super::*;

struct Checked {
    parsed: jx_parse::ParseOutput,
    output: TypeckOutput,
}

fn check_source(source: &str) -> Checked {
    let lexed = jx_lexer::lex(source);
    assert!(lexed.errors.is_empty());
    let parsed = jx_parse::parse(&lexed.tokens, source);
    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    let output = check(&parsed.unit, &parsed.arena);
    Checked { parsed, output }
}

impl Checked {
    /// Root expression of the last statement (initializer or expression).
    fn last_root(&self) -> ExprId {
        match &self.parsed.unit.stmts.last().unwrap().kind {
            StmtKind::Local { init, .. } => init.unwrap(),
            StmtKind::Expr(id) => *id,
        }
    }

    fn last_type(&self) -> Option<&TypeRef> {
        self.output.types.get(self.last_root())
    }

    fn codes(&self) -> Vec<ErrorCode> {
        self.output.errors.iter().map(TypeError::code).collect()
    }
}

fn prim(p: PrimitiveType) -> TypeRef {
    p.into()
}

#[test]
fn literal_types() {
    for (source, expected) in [
        ("1;", TypeRef::INT),
        ("1L;", TypeRef::LONG),
        ("1.0f;", prim(PrimitiveType::Float)),
        ("1.0;", prim(PrimitiveType::Double)),
        ("'c';", prim(PrimitiveType::Char)),
        ("\"s\";", TypeRef::string()),
        ("false;", TypeRef::BOOLEAN),
        ("null;", TypeRef::Null),
    ] {
        let checked = check_source(source);
        assert_eq!(checked.last_type(), Some(&expected), "{source}");
    }
}

#[test]
fn identifiers_take_declared_type() {
    let checked = check_source("byte b = 1; b;");
    assert_eq!(checked.last_type(), Some(&prim(PrimitiveType::Byte)));
    assert!(checked.output.errors.is_empty());
}

#[test]
fn unsigned_shift_operand_types_are_recorded() {
    let checked = check_source("short s = 1; int r = s >>> 2;");
    let root = checked.last_root();
    let ExprKind::Infix(infix) = &checked.parsed.arena.get_expr(root).kind else {
        panic!("expected infix");
    };
    assert_eq!(
        checked.output.types.get(infix.left),
        Some(&prim(PrimitiveType::Short))
    );
    assert_eq!(checked.output.types.get(root), Some(&TypeRef::INT));
}

#[test]
fn chains_fold_left_to_right() {
    let checked = check_source("int a = 1; a + 2 + \"x\";");
    assert_eq!(checked.last_type(), Some(&TypeRef::string()));
    let checked = check_source("long l = 1; int i = 2; i * l * i;");
    assert_eq!(checked.last_type(), Some(&TypeRef::LONG));
}

#[test]
fn unary_and_casts() {
    assert_eq!(
        check_source("char c = 'a'; -c;").last_type(),
        Some(&TypeRef::INT)
    );
    assert_eq!(
        check_source("long l = 3; (byte) l;").last_type(),
        Some(&prim(PrimitiveType::Byte))
    );
    assert_eq!(check_source("!true;").last_type(), Some(&TypeRef::BOOLEAN));
}

#[test]
fn conditional_and_assignment() {
    assert_eq!(
        check_source("boolean f = true; f ? 1 : 2L;").last_type(),
        Some(&TypeRef::LONG)
    );
    assert_eq!(
        check_source("short s = 0; s += 1;").last_type(),
        Some(&prim(PrimitiveType::Short))
    );
}

#[test]
fn unknown_identifier_leaves_type_unresolved() {
    let checked = check_source("x >>> 1;");
    assert_eq!(checked.codes(), vec![ErrorCode::E2003]);
    assert_eq!(checked.last_type(), None);
}

#[test]
fn initializer_cannot_see_its_own_name() {
    let checked = check_source("int x = x;");
    assert_eq!(checked.codes(), vec![ErrorCode::E2003]);
}

#[test]
fn duplicate_local() {
    let checked = check_source("int x; long x;");
    assert_eq!(checked.codes(), vec![ErrorCode::E2006]);
    let diag = checked.output.errors[0].to_diagnostic();
    assert_eq!(diag.labels.len(), 2);
}

#[test]
fn bad_operands() {
    assert_eq!(check_source("true + 1;").codes(), vec![ErrorCode::E2020]);
    assert_eq!(check_source("1.5 >>> 1;").codes(), vec![ErrorCode::E2020]);
    assert_eq!(check_source("1 && true;").codes(), vec![ErrorCode::E2020]);
    assert_eq!(check_source("~1.0;").codes(), vec![ErrorCode::E2020]);
    assert_eq!(check_source("1 ? 2 : 3;").codes(), vec![ErrorCode::E2020]);
    assert_eq!(check_source("(int) true;").codes(), vec![ErrorCode::E2020]);
}

#[test]
fn errors_do_not_cascade() {
    let checked = check_source("y + 1 + 2;");
    assert_eq!(checked.codes(), vec![ErrorCode::E2003]);
}
