//! Literal and identifier evaluation

use crate::ast::{ExprIdent, ExprLiteral, LiteralValue};
use crate::{Environment, EvalContext, EvalError, Value};

use super::Evaluate;

impl Evaluate for ExprLiteral {
    fn eval(
        &self,
        _env: &Environment<Value>,
        _ctx: &EvalContext,
    ) -> Result<Option<Value>, EvalError> {
        Ok(Some(eval_lit(self.value)))
    }
}

/// Evaluate a literal to a Value.
pub fn eval_lit(lit: LiteralValue) -> Value {
    match lit {
        LiteralValue::Nat(n) => Value::Nat(n),
        LiteralValue::Bool(b) => Value::Bool(b),
    }
}

impl Evaluate for ExprIdent {
    fn eval(
        &self,
        env: &Environment<Value>,
        _ctx: &EvalContext,
    ) -> Result<Option<Value>, EvalError> {
        Ok(env.get(&self.name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;

    #[test]
    fn test_literals() {
        let env = Environment::new();
        let ctx = EvalContext::new();
        assert_eq!(Expr::zero().eval(&env, &ctx).unwrap(), Some(Value::Nat(0)));
        assert_eq!(
            Expr::boolean(false).eval(&env, &ctx).unwrap(),
            Some(Value::Bool(false))
        );
    }

    #[test]
    fn test_identifier() {
        let env = Environment::new().bind("n", Value::Nat(7));
        let ctx = EvalContext::new();
        assert_eq!(Expr::ident("n").eval(&env, &ctx).unwrap(), Some(Value::Nat(7)));
        assert_eq!(Expr::ident("m").eval(&env, &ctx).unwrap(), None);
    }
}
