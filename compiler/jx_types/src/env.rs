//! Local variable environment.
//!
//! Java forbids shadowing a local with another local, and the subset has no
//! nested blocks, so one flat map is the whole scope.

use jx_ir::{Name, Span, TypeRef};
use rustc_hash::FxHashMap;

#[derive(Clone, Debug)]
struct Binding {
    ty: TypeRef,
    span: Span,
}

/// Declared locals by name.
#[derive(Clone, Debug, Default)]
pub struct TypeEnv {
    bindings: FxHashMap<Name, Binding>,
}

impl TypeEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name`. On redeclaration returns the span of the first
    /// declaration and keeps the original binding.
    pub fn declare(&mut self, name: Name, ty: TypeRef, span: Span) -> Result<(), Span> {
        if let Some(existing) = self.bindings.get(&name) {
            return Err(existing.span);
        }
        self.bindings.insert(name, Binding { ty, span });
        Ok(())
    }

    pub fn lookup(&self, name: &Name) -> Option<&TypeRef> {
        self.bindings.get(name).map(|b| &b.ty)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redeclaration_reports_first_site() {
        let mut env = TypeEnv::new();
        assert!(env.is_empty());
        assert_eq!(env.declare(Name::new("x"), TypeRef::INT, Span::new(4, 5)), Ok(()));
        assert_eq!(
            env.declare(Name::new("x"), TypeRef::LONG, Span::new(20, 21)),
            Err(Span::new(4, 5))
        );
        assert_eq!(env.lookup(&Name::new("x")), Some(&TypeRef::INT));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn unknown_names() {
        let env = TypeEnv::new();
        assert_eq!(env.lookup(&Name::new("y")), None);
    }
}
