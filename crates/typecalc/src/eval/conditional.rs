//! Conditional evaluation

use crate::ast::ExprIf;
use crate::{Environment, EvalContext, EvalError, Value};

use super::{eval_child, Evaluate};

impl Evaluate for ExprIf {
    fn eval(
        &self,
        env: &Environment<Value>,
        ctx: &EvalContext,
    ) -> Result<Option<Value>, EvalError> {
        let condition = eval_child(self.condition.as_deref(), env, ctx)?;

        // A missing condition value counts as false
        let branch = if condition.as_ref().is_some_and(Value::is_truthy) {
            &self.then_branch
        } else {
            &self.else_branch
        };
        eval_child(branch.as_deref(), env, ctx)
    }
}
