//! Static type resolution for the Java expression subset.
//!
//! Assigns a [`TypeRef`] to every expression it can, following Java's
//! promotion rules, and reports the errors a Java compiler would report for
//! this subset. Expressions whose type cannot be determined (an unknown
//! name, an operator applied to the wrong kinds) have no entry in
//! [`ExprTypes`]; later phases must not guess.

mod env;
mod error;
mod infer;

use jx_ir::{ExprArena, ExprId, TypeRef, Unit};
use tracing::debug;

pub use env::TypeEnv;
pub use error::{TypeError, TypeErrorKind};

/// Static type of each expression, indexed by [`ExprId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprTypes {
    types: Vec<Option<TypeRef>>,
}

impl ExprTypes {
    fn with_len(len: usize) -> Self {
        ExprTypes {
            types: vec![None; len],
        }
    }

    /// Static type of `id`, or `None` if it could not be resolved.
    pub fn get(&self, id: ExprId) -> Option<&TypeRef> {
        self.types.get(id.index()).and_then(Option::as_ref)
    }

    fn set(&mut self, id: ExprId, ty: Option<TypeRef>) {
        if let Some(slot) = self.types.get_mut(id.index()) {
            *slot = ty;
        }
    }

    /// Number of expressions with a resolved type.
    pub fn resolved_count(&self) -> usize {
        self.types.iter().filter(|t| t.is_some()).count()
    }
}

/// Types plus the errors found while computing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeckOutput {
    pub types: ExprTypes,
    pub errors: Vec<TypeError>,
}

impl TypeckOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Resolve the static type of every expression in `unit`.
pub fn check(unit: &Unit, arena: &ExprArena) -> TypeckOutput {
    let mut checker = infer::Checker::new(arena);
    for stmt in &unit.stmts {
        checker.check_stmt(stmt);
    }
    let output = checker.finish();
    debug!(
        resolved = output.types.resolved_count(),
        total = arena.len(),
        errors = output.errors.len(),
        "type resolution finished"
    );
    output
}

#[cfg(test)]
mod tests;
