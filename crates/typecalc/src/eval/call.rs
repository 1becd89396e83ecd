//! Application evaluation

use tracing::trace;

use crate::ast::ExprApp;
use crate::{ClosureValue, Environment, EvalContext, EvalError, Value};

use super::{eval_child, Evaluate};

impl Evaluate for ExprApp {
    fn eval(
        &self,
        env: &Environment<Value>,
        ctx: &EvalContext,
    ) -> Result<Option<Value>, EvalError> {
        // Evaluate the function position, then the argument
        let func = eval_child(self.left.as_deref(), env, ctx)?;
        let arg = eval_child(self.right.as_deref(), env, ctx)?;

        match (func, arg) {
            (Some(Value::Closure(closure)), Some(arg)) => call_closure(&closure, arg, env, ctx),
            _ => Ok(None),
        }
    }
}

/// Call a closure with one argument.
///
/// The body runs in the closure's captured environment extended with a fresh
/// scope for the parameter. `env` is the caller's environment and only
/// supplies the current call depth.
///
/// # Errors
///
/// Returns `CallDepthExceeded` if the call would nest deeper than
/// `ctx.max_call_depth`.
pub fn call_closure(
    closure: &ClosureValue,
    arg: Value,
    env: &Environment<Value>,
    ctx: &EvalContext,
) -> Result<Option<Value>, EvalError> {
    // Track call depth (stack overflow protection)
    let depth = env.call_depth() + 1;
    if depth > ctx.max_call_depth {
        return Err(EvalError::CallDepthExceeded {
            depth,
            max: ctx.max_call_depth,
        });
    }

    if ctx.trace {
        trace!(param = %closure.param, arg = %arg, depth, "calling closure");
    }

    let scope = closure
        .captured
        .with_call_depth(depth)
        .bind(closure.param.as_str(), arg);
    eval_child(closure.body.as_deref(), &scope, ctx)
}
