//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nat(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Closure(c) => write!(
                f,
                "<closure λ{}:{} ({} captured)>",
                c.param,
                c.param_type,
                c.captured.len()
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Closure(c) => write!(f, "<closure λ{}:{}>", c.param, c.param_type),
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BaseType, Expr};
    use crate::environment::Environment;

    #[test]
    fn test_display_nat() {
        assert_eq!(Value::Nat(0).to_string(), "0");
        assert_eq!(Value::Nat(42).to_string(), "42");
    }

    #[test]
    fn test_display_bool() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_display_closure_is_opaque() {
        let closure = ClosureValue::new(
            "x",
            BaseType::Nat,
            Some(Arc::new(Expr::ident("x"))),
            Environment::new(),
        );
        let value = Value::Closure(Arc::new(closure));
        assert_eq!(value.to_string(), "<closure λx:Nat>");
        assert_eq!(format!("{:?}", value), "<closure λx:Nat (0 captured)>");
    }
}
