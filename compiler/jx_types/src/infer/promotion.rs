//! Java numeric promotion and operator typing rules.

use jx_ir::{InfixOp, PrimitiveType, TypeRef};

/// Unary numeric promotion: `byte`, `short` and `char` widen to `int`.
pub(crate) fn unary_promote(p: PrimitiveType) -> PrimitiveType {
    match p {
        PrimitiveType::Byte | PrimitiveType::Short | PrimitiveType::Char => PrimitiveType::Int,
        other => other,
    }
}

/// Binary numeric promotion of two numeric operands.
pub(crate) fn binary_promote(a: PrimitiveType, b: PrimitiveType) -> PrimitiveType {
    use PrimitiveType::{Double, Float, Int, Long};
    match (a, b) {
        (Double, _) | (_, Double) => Double,
        (Float, _) | (_, Float) => Float,
        (Long, _) | (_, Long) => Long,
        _ => Int,
    }
}

fn numeric(ty: &TypeRef) -> Option<PrimitiveType> {
    ty.as_primitive().filter(|p| p.is_numeric())
}

fn integral(ty: &TypeRef) -> Option<PrimitiveType> {
    ty.as_primitive().filter(|p| p.is_integral())
}

fn is_boolean(ty: &TypeRef) -> bool {
    *ty == TypeRef::BOOLEAN
}

fn is_reference(ty: &TypeRef) -> bool {
    matches!(ty, TypeRef::Class(_) | TypeRef::Null)
}

/// Result type of `left op right`, or `None` if Java rejects the operands.
pub(crate) fn infix_result(op: InfixOp, left: &TypeRef, right: &TypeRef) -> Option<TypeRef> {
    match op {
        InfixOp::Add if left.is_string() || right.is_string() => Some(TypeRef::string()),
        InfixOp::Mul | InfixOp::Div | InfixOp::Rem | InfixOp::Add | InfixOp::Sub => {
            let (l, r) = (numeric(left)?, numeric(right)?);
            Some(binary_promote(l, r).into())
        }
        InfixOp::Shl | InfixOp::Shr | InfixOp::UShr => {
            let l = integral(left)?;
            integral(right)?;
            Some(unary_promote(l).into())
        }
        InfixOp::Lt | InfixOp::Gt | InfixOp::LtEq | InfixOp::GtEq => {
            numeric(left)?;
            numeric(right)?;
            Some(TypeRef::BOOLEAN)
        }
        InfixOp::Eq | InfixOp::NotEq => {
            let comparable = (numeric(left).is_some() && numeric(right).is_some())
                || (is_boolean(left) && is_boolean(right))
                || (is_reference(left) && is_reference(right));
            comparable.then_some(TypeRef::BOOLEAN)
        }
        InfixOp::BitAnd | InfixOp::BitXor | InfixOp::BitOr => {
            if is_boolean(left) && is_boolean(right) {
                return Some(TypeRef::BOOLEAN);
            }
            let (l, r) = (integral(left)?, integral(right)?);
            Some(binary_promote(l, r).into())
        }
        InfixOp::And | InfixOp::Or => {
            (is_boolean(left) && is_boolean(right)).then_some(TypeRef::BOOLEAN)
        }
    }
}

/// Common type of the two branches of `?:`.
pub(crate) fn conditional_result(then_ty: &TypeRef, else_ty: &TypeRef) -> Option<TypeRef> {
    if then_ty == else_ty {
        return Some(then_ty.clone());
    }
    match (then_ty, else_ty) {
        (TypeRef::Null, TypeRef::Class(_)) => Some(else_ty.clone()),
        (TypeRef::Class(_), TypeRef::Null) => Some(then_ty.clone()),
        _ => {
            let (t, e) = (numeric(then_ty)?, numeric(else_ty)?);
            Some(binary_promote(t, e).into())
        }
    }
}

/// Whether a value of `from` may be cast to `to`.
pub(crate) fn castable(from: &TypeRef, to: &TypeRef) -> bool {
    match (from.as_primitive(), to.as_primitive()) {
        (Some(f), Some(t)) => f.is_numeric() == t.is_numeric(),
        (None, None) => true,
        _ => false,
    }
}
