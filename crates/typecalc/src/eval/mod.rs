//! Expression evaluation
//!
//! Evaluation is a tree walk over an environment of values. Every node yields
//! `Ok(Some(value))`, or `Ok(None)` when there is nothing to produce: an
//! absent child, an unbound name, or an operation applied to a value it does
//! not accept. A tree that type checked cleanly never hits the `None` cases.
//! Errors are reserved for limits set on the [`EvalContext`].

pub mod arith;
pub mod call;
pub mod conditional;
pub mod function;
pub mod literal;

use crate::ast::Expr;
use crate::{Environment, EvalContext, EvalError, Value};

/// Trait for evaluating tree nodes to values.
pub trait Evaluate {
    /// Evaluate this node in the given environment.
    fn eval(&self, env: &Environment<Value>, ctx: &EvalContext)
        -> Result<Option<Value>, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expr {
    fn eval(
        &self,
        env: &Environment<Value>,
        ctx: &EvalContext,
    ) -> Result<Option<Value>, EvalError> {
        // Check for interruption before each expression
        if ctx.is_interrupted() {
            return Err(EvalError::Interrupted);
        }

        match self {
            Expr::Literal(expr) => expr.eval(env, ctx),
            Expr::Identifier(expr) => expr.eval(env, ctx),
            Expr::Conditional(expr) => expr.eval(env, ctx),
            Expr::Abstraction(expr) => expr.eval(env, ctx),
            Expr::Application(expr) => expr.eval(env, ctx),
            Expr::Arithmetic(expr) => expr.eval(env, ctx),
            Expr::IsZero(expr) => expr.eval(env, ctx),

            // Nodes this crate does not know are vacuously true
            Expr::Unknown => Ok(Some(Value::Bool(true))),
        }
    }
}

/// Evaluate an optional child; an absent child has no value.
pub fn eval_child(
    expr: Option<&Expr>,
    env: &Environment<Value>,
    ctx: &EvalContext,
) -> Result<Option<Value>, EvalError> {
    match expr {
        Some(expr) => expr.eval(env, ctx),
        None => Ok(None),
    }
}

/// Evaluate a tree.
///
/// # Errors
///
/// Returns [`EvalError::Interrupted`] if the context's interrupt flag is
/// raised, and [`EvalError::CallDepthExceeded`] if closure invocations nest
/// deeper than the context allows.
///
/// # Example
///
/// ```
/// use typecalc::{evaluate, parse, Environment, EvalContext, Value};
///
/// let expr = parse("(λx:Nat→x) succ 0").unwrap();
/// let value = evaluate(Some(&expr), &Environment::new(), &EvalContext::new()).unwrap();
/// assert_eq!(value, Some(Value::Nat(1)));
/// ```
pub fn evaluate(
    expr: Option<&Expr>,
    env: &Environment<Value>,
    ctx: &EvalContext,
) -> Result<Option<Value>, EvalError> {
    eval_child(expr, env, ctx)
}
