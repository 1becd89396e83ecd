//! Successor, predecessor and zero test

use crate::ast::{ArithOp, ExprArith, ExprIsZero};
use crate::{Environment, EvalContext, EvalError, Value};

use super::{eval_child, Evaluate};

impl Evaluate for ExprArith {
    fn eval(
        &self,
        env: &Environment<Value>,
        ctx: &EvalContext,
    ) -> Result<Option<Value>, EvalError> {
        let operand = eval_child(self.expr.as_deref(), env, ctx)?;
        Ok(operand
            .as_ref()
            .and_then(Value::as_nat)
            .map(|n| Value::Nat(apply_arith(self.op, n))))
    }
}

/// Apply `succ` or `pred` to a natural number.
///
/// `pred 0` is `0`.
pub fn apply_arith(op: ArithOp, n: u64) -> u64 {
    match op {
        ArithOp::Succ => n.saturating_add(1),
        ArithOp::Pred => n.saturating_sub(1),
    }
}

impl Evaluate for ExprIsZero {
    fn eval(
        &self,
        env: &Environment<Value>,
        ctx: &EvalContext,
    ) -> Result<Option<Value>, EvalError> {
        let operand = eval_child(self.expr.as_deref(), env, ctx)?;
        Ok(Some(Value::Bool(matches!(operand, Some(Value::Nat(0))))))
    }
}
