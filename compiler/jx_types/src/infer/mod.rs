//! Bottom-up type inference over one unit.

mod promotion;

use jx_ir::{
    ExprArena, ExprId, ExprKind, InfixExpr, LiteralKind, PrimitiveType, Span, Stmt, StmtKind,
    TypeRef, UnaryOp,
};
use jx_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ExprTypes, TypeEnv, TypeError, TypeErrorKind, TypeckOutput};

use promotion::{castable, conditional_result, infix_result, unary_promote};

pub(crate) struct Checker<'a> {
    arena: &'a ExprArena,
    env: TypeEnv,
    types: ExprTypes,
    errors: Vec<TypeError>,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(arena: &'a ExprArena) -> Self {
        Checker {
            arena,
            env: TypeEnv::new(),
            types: ExprTypes::with_len(arena.len()),
            errors: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> TypeckOutput {
        TypeckOutput {
            types: self.types,
            errors: self.errors,
        }
    }

    pub(crate) fn check_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Local {
                ty,
                name,
                name_span,
                init,
                ..
            } => {
                // The initializer is checked before the name is in scope.
                if let Some(init) = init {
                    self.infer(*init);
                }
                if let Err(previous) = self.env.declare(name.clone(), ty.clone(), *name_span) {
                    self.error(
                        TypeErrorKind::DuplicateLocal {
                            name: name.clone(),
                            previous,
                        },
                        *name_span,
                    );
                }
            }
            StmtKind::Expr(id) => {
                self.infer(*id);
            }
        }
    }

    fn error(&mut self, kind: TypeErrorKind, span: Span) {
        self.errors.push(TypeError::new(kind, span));
    }

    /// Infer and record the type of `id`.
    fn infer(&mut self, id: ExprId) -> Option<TypeRef> {
        let ty = ensure_sufficient_stack(|| self.infer_inner(id));
        trace!(expr = id.index(), ty = ?ty, "inferred");
        self.types.set(id, ty.clone());
        ty
    }

    fn infer_inner(&mut self, id: ExprId) -> Option<TypeRef> {
        let arena = self.arena;
        let expr = arena.get_expr(id);
        let span = expr.span;
        match &expr.kind {
            ExprKind::Literal(lit) => Some(literal_type(*lit)),
            ExprKind::Ident(name) => {
                let found = self.env.lookup(name).cloned();
                if found.is_none() {
                    self.error(TypeErrorKind::UnknownIdentifier { name: name.clone() }, span);
                }
                found
            }
            ExprKind::Paren(inner) => self.infer(*inner),
            ExprKind::Unary { op, operand } => {
                let operand_ty = self.infer(*operand)?;
                self.unary(*op, operand_ty, span)
            }
            ExprKind::Cast { ty, operand, .. } => {
                let from = self.infer(*operand);
                if let Some(from) = from {
                    if !castable(&from, ty) {
                        self.error(
                            TypeErrorKind::BadCast {
                                from,
                                to: ty.clone(),
                            },
                            span,
                        );
                    }
                }
                Some(ty.clone())
            }
            ExprKind::Infix(infix) => self.infix(infix, span),
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => {
                let cond_ty = self.infer(*cond);
                let then_ty = self.infer(*then_expr);
                let else_ty = self.infer(*else_expr);
                if let Some(found) = cond_ty.filter(|t| *t != TypeRef::BOOLEAN) {
                    let cond_span = arena.get_expr(*cond).span;
                    self.error(TypeErrorKind::NonBooleanCondition { found }, cond_span);
                }
                let (then_ty, else_ty) = (then_ty?, else_ty?);
                let result = conditional_result(&then_ty, &else_ty);
                if result.is_none() {
                    self.error(TypeErrorKind::IncompatibleBranches { then_ty, else_ty }, span);
                }
                result
            }
            ExprKind::Assign { op, target, value } => {
                let target_ty = self.infer(*target);
                let value_ty = self.infer(*value);
                if let (Some(op), Some(t), Some(v)) = (op, &target_ty, &value_ty) {
                    // `a op= b` is `a = (T)(a op b)`: only the operator must apply.
                    if infix_result(*op, t, v).is_none() {
                        self.error(
                            TypeErrorKind::BadOperands {
                                op: op.as_symbol(),
                                left: t.clone(),
                                right: v.clone(),
                            },
                            span,
                        );
                    }
                }
                target_ty
            }
        }
    }

    fn unary(&mut self, op: UnaryOp, operand: TypeRef, span: Span) -> Option<TypeRef> {
        let prim = operand.as_primitive();
        let result = match op {
            UnaryOp::Not => (operand == TypeRef::BOOLEAN).then_some(TypeRef::BOOLEAN),
            UnaryOp::Neg | UnaryOp::Plus => prim
                .filter(|p| p.is_numeric())
                .map(|p| unary_promote(p).into()),
            UnaryOp::BitNot => prim
                .filter(|p| p.is_integral())
                .map(|p| unary_promote(p).into()),
        };
        if result.is_none() {
            self.error(
                TypeErrorKind::BadOperand {
                    op: op.as_symbol(),
                    operand,
                },
                span,
            );
        }
        result
    }

    /// Fold a chain left to right: `a op b op c` is `(a op b) op c`.
    fn infix(&mut self, infix: &InfixExpr, span: Span) -> Option<TypeRef> {
        let operand_types: Vec<Option<TypeRef>> =
            infix.operands().map(|id| self.infer(id)).collect();

        let mut operand_types = operand_types.into_iter();
        let mut acc = operand_types.next().flatten();
        for next in operand_types {
            let (left, right) = (acc?, next?);
            acc = infix_result(infix.op, &left, &right);
            if acc.is_none() {
                self.error(
                    TypeErrorKind::BadOperands {
                        op: infix.op.as_symbol(),
                        left,
                        right,
                    },
                    span,
                );
            }
        }
        acc
    }
}

fn literal_type(lit: LiteralKind) -> TypeRef {
    match lit {
        LiteralKind::Int => TypeRef::INT,
        LiteralKind::Long => TypeRef::LONG,
        LiteralKind::Float => PrimitiveType::Float.into(),
        LiteralKind::Double => PrimitiveType::Double.into(),
        LiteralKind::Char => PrimitiveType::Char.into(),
        LiteralKind::String => TypeRef::string(),
        LiteralKind::Bool => TypeRef::BOOLEAN,
        LiteralKind::Null => TypeRef::Null,
    }
}
