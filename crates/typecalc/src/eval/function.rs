//! Abstraction evaluation

use crate::ast::ExprAbs;
use crate::{ClosureValue, Environment, EvalContext, EvalError, Value};

use super::Evaluate;

impl Evaluate for ExprAbs {
    fn eval(
        &self,
        env: &Environment<Value>,
        _ctx: &EvalContext,
    ) -> Result<Option<Value>, EvalError> {
        Ok(Some(Value::closure(closure_from_abs(self, env))))
    }
}

/// Capture the current environment into a closure.
///
/// Both the chain and the body are shared, not copied. Later extensions of
/// `env` by the caller build new chains and are never seen by the closure.
pub fn closure_from_abs(abs: &ExprAbs, env: &Environment<Value>) -> ClosureValue {
    ClosureValue::new(
        abs.param.as_str(),
        abs.param_type,
        abs.body.clone(),
        env.clone(),
    )
}
