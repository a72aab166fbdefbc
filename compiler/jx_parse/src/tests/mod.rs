//! Parser tests.
//!
//! - `parser`: statements, primaries, unary operators, casts, assignment
//! - `chains`: precedence and the flatten-or-nest shape of operator chains

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod parser;

use jx_ir::{Expr, ExprId, ExprKind, StmtKind};

use crate::{parse, ParseOutput};

pub(super) fn parse_source(source: &str) -> ParseOutput {
    let lexed = jx_lexer::lex(source);
    assert!(lexed.errors.is_empty(), "lex errors: {:?}", lexed.errors);
    parse(&lexed.tokens, source)
}

/// Parse `source` as a single expression statement and return its root.
pub(super) fn parse_expr(source: &str) -> (ParseOutput, ExprId) {
    let text = format!("{source};");
    let output = parse_source(&text);
    assert!(output.errors.is_empty(), "parse errors: {:?}", output.errors);
    assert_eq!(output.unit.stmts.len(), 1);
    let StmtKind::Expr(id) = output.unit.stmts[0].kind else {
        panic!("expected expression statement");
    };
    (output, id)
}

pub(super) fn expr(output: &ParseOutput, id: ExprId) -> &Expr {
    output.arena.get_expr(id)
}

/// Render an expression as an s-expression, for shape assertions.
pub(super) fn sexpr(output: &ParseOutput, source: &str, id: ExprId) -> String {
    let e = expr(output, id);
    match &e.kind {
        ExprKind::Literal(_) | ExprKind::Ident(_) => e.span.slice(source).unwrap().to_string(),
        ExprKind::Paren(inner) => format!("(paren {})", sexpr(output, source, *inner)),
        ExprKind::Unary { op, operand } => {
            format!("({} {})", op.as_symbol(), sexpr(output, source, *operand))
        }
        ExprKind::Cast { ty, operand, .. } => {
            format!("(cast {ty} {})", sexpr(output, source, *operand))
        }
        ExprKind::Infix(infix) => {
            let operands: Vec<String> = infix
                .operands()
                .map(|o| sexpr(output, source, o))
                .collect();
            format!("({} {})", infix.op.as_symbol(), operands.join(" "))
        }
        ExprKind::Conditional {
            cond,
            then_expr,
            else_expr,
        } => format!(
            "(? {} {} {})",
            sexpr(output, source, *cond),
            sexpr(output, source, *then_expr),
            sexpr(output, source, *else_expr)
        ),
        ExprKind::Assign { op, target, value } => format!(
            "({}= {} {})",
            op.map_or("", |op| op.as_symbol()),
            sexpr(output, source, *target),
            sexpr(output, source, *value)
        ),
    }
}

/// Parse and render in one step.
pub(super) fn shape(source: &str) -> String {
    let (output, id) = parse_expr(source);
    sexpr(&output, &format!("{source};"), id)
}
