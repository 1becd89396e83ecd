//! Value trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::sync::Arc;

use super::*;
use crate::check::check;
use crate::environment::Environment;
use crate::types::Type;

impl Value {
    /// Create a closure value
    pub fn closure(closure: ClosureValue) -> Self {
        Value::Closure(Arc::new(closure))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is a natural number
    pub fn is_nat(&self) -> bool {
        matches!(self, Value::Nat(_))
    }

    /// Check if value is boolean
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is a closure
    pub fn is_closure(&self) -> bool {
        matches!(self, Value::Closure(_))
    }

    /// Truthiness used by conditionals: `true`, any non-zero number, and any
    /// closure hold.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Nat(n) => *n != 0,
            Value::Closure(_) => true,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Try to extract a natural number
    pub fn as_nat(&self) -> Option<u64> {
        match self {
            Value::Nat(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to extract a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to extract a closure
    pub fn as_closure(&self) -> Option<&ClosureValue> {
        match self {
            Value::Closure(c) => Some(c),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Relationship
    // ═══════════════════════════════════════════════════════════════════

    /// Name of the value's runtime tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nat(_) => "Nat",
            Value::Bool(_) => "Bool",
            Value::Closure(_) => "closure",
        }
    }

    /// The static type of the value, if one can be established.
    ///
    /// A closure is typed by checking its body with the parameter bound and
    /// every captured value given its own static type. Closures without a
    /// body, with a body that does not check cleanly, or capturing a value
    /// that cannot be typed have no type.
    pub fn static_type(&self) -> Option<Type> {
        match self {
            Value::Nat(_) => Some(Type::Nat),
            Value::Bool(_) => Some(Type::Bool),
            Value::Closure(c) => closure_type(c),
        }
    }

    /// Check that the value has a static type, and that it is `ty`.
    pub fn matches_type(&self, ty: &Type) -> bool {
        self.static_type().as_ref() == Some(ty)
    }
}

fn closure_type(closure: &ClosureValue) -> Option<Type> {
    let body = closure.body.as_deref()?;

    // Rebuild the captured chain outermost first so shadowing is preserved
    let frames: Vec<_> = closure.captured.frames().collect();
    let mut env = Environment::new();
    for frame in frames.into_iter().rev() {
        let scope = frame
            .iter()
            .map(|(name, value)| value.static_type().map(|ty| (name, ty)))
            .collect::<Option<Vec<_>>>()?;
        env = env.with_scope(scope);
    }

    let param_ty = Type::from(closure.param_type);
    let checked = check(Some(body), &env.bind(closure.param.as_str(), param_ty.clone()));
    if !checked.is_ok() {
        return None;
    }
    checked.ty.map(|body_ty| Type::arrow(param_ty, body_ty))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nat(a), Value::Nat(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // Closures compare by identity
            (Value::Closure(a), Value::Closure(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Nat(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<ClosureValue> for Value {
    fn from(c: ClosureValue) -> Self {
        Value::closure(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BaseType, Expr};

    fn identity() -> Value {
        Value::closure(ClosureValue::new(
            "x",
            BaseType::Nat,
            Some(Arc::new(Expr::ident("x"))),
            Environment::new(),
        ))
    }

    #[test]
    fn test_predicates() {
        assert!(Value::Nat(1).is_nat());
        assert!(Value::Bool(false).is_bool());
        assert!(identity().is_closure());
        assert!(!Value::Nat(0).is_bool());
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::Bool(true).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Nat(0).is_truthy());
        assert!(Value::Nat(3).is_truthy());
        assert!(identity().is_truthy());
    }

    #[test]
    fn test_extractors() {
        assert_eq!(Value::Nat(5).as_nat(), Some(5));
        assert_eq!(Value::Bool(true).as_nat(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(identity().as_closure().map(|c| c.param.as_str()), Some("x"));
    }

    #[test]
    fn test_closure_identity_equality() {
        let a = identity();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, identity());
    }

    #[test]
    fn test_matches_type() {
        assert!(Value::Nat(0).matches_type(&Type::Nat));
        assert!(!Value::Nat(0).matches_type(&Type::Bool));
        assert!(identity().matches_type(&Type::arrow(Type::Nat, Type::Nat)));
        assert!(!identity().matches_type(&Type::arrow(Type::Bool, Type::Nat)));
        assert!(!identity().matches_type(&Type::Nat));
        assert!(!identity().matches_type(&Type::arrow(Type::Nat, Type::Bool)));
    }

    #[test]
    fn test_closure_type_comes_from_body() {
        let is_zero = Value::closure(ClosureValue::new(
            "x",
            BaseType::Nat,
            Some(Arc::new(Expr::is_zero(Expr::ident("x")))),
            Environment::new(),
        ));
        assert_eq!(
            is_zero.static_type(),
            Some(Type::arrow(Type::Nat, Type::Bool))
        );
    }

    #[test]
    fn test_closure_type_uses_captured_values() {
        let captured = Environment::new()
            .bind("flag", Value::Bool(true))
            .bind("n", Value::Nat(2));
        let pick = Value::closure(ClosureValue::new(
            "x",
            BaseType::Nat,
            Some(Arc::new(Expr::conditional(
                Expr::ident("flag"),
                Expr::ident("n"),
                Expr::ident("x"),
            ))),
            captured,
        ));
        assert_eq!(pick.static_type(), Some(Type::arrow(Type::Nat, Type::Nat)));

        // The inner `flag` shadows the outer one
        let shadowed = Environment::new()
            .bind("flag", Value::Bool(true))
            .bind("flag", Value::Nat(0));
        let broken = Value::closure(ClosureValue::new(
            "x",
            BaseType::Nat,
            Some(Arc::new(Expr::conditional(
                Expr::ident("flag"),
                Expr::ident("x"),
                Expr::ident("x"),
            ))),
            shadowed,
        ));
        assert_eq!(broken.static_type(), None);
    }

    #[test]
    fn test_untypeable_closures() {
        let no_body = Value::closure(ClosureValue::new("x", BaseType::Nat, None, Environment::new()));
        assert_eq!(no_body.static_type(), None);

        let ill_typed = Value::closure(ClosureValue::new(
            "x",
            BaseType::Bool,
            Some(Arc::new(Expr::succ(Expr::ident("x")))),
            Environment::new(),
        ));
        assert_eq!(ill_typed.static_type(), None);

        let captures_ill_typed = Value::closure(ClosureValue::new(
            "y",
            BaseType::Nat,
            Some(Arc::new(Expr::ident("y"))),
            Environment::new().bind("f", ill_typed),
        ));
        assert_eq!(captures_ill_typed.static_type(), None);
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Value::from(3u64), Value::Nat(3));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::Nat(1).type_name(), "Nat");
        assert_eq!(identity().type_name(), "closure");
    }
}
