//! Parse, check and evaluate in one call

use std::fmt;

use tracing::debug;

use crate::ast::Expr;
use crate::check::{check, Checked};
use crate::environment::Prelude;
use crate::error::{Result, SyntaxError, TypeErrors};
use crate::eval::evaluate;
use crate::parser::{parse_with_max_nesting, DEFAULT_MAX_NESTING};
use crate::types::Type;
use crate::value::Value;
use crate::{EvalContext, EvalError};

/// Result of running a program that parsed and checked cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The checked type of the program
    pub ty: Option<Type>,

    /// The computed value
    pub value: Option<Value>,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("no value"),
        }
    }
}

/// The parse → check → evaluate pipeline.
///
/// Evaluation only runs when checking produced no diagnostics. Every stage is
/// also available on its own so a host can stop after any of them.
///
/// # Example
///
/// ```
/// use typecalc::{Pipeline, Type, Value};
///
/// let result = Pipeline::new().run("if iszero 0 then succ 0 else 0").unwrap();
/// assert_eq!(result.ty, Some(Type::Nat));
/// assert_eq!(result.value, Some(Value::Nat(1)));
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    ctx: EvalContext,
    prelude: Prelude,
    max_nesting: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            ctx: EvalContext::default(),
            prelude: Prelude::default(),
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl Pipeline {
    /// Create a pipeline with default limits and no global bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow programs to nest at most `max_nesting` levels deep.
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    /// Use a specific evaluation context.
    pub fn with_context(mut self, ctx: EvalContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Make a prelude's bindings visible to every program.
    pub fn with_prelude(mut self, prelude: Prelude) -> Self {
        self.prelude = prelude;
        self
    }

    /// The evaluation context, e.g. to interrupt a running evaluation.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// The global bindings.
    pub fn prelude(&self) -> &Prelude {
        &self.prelude
    }

    /// Parse a program.
    ///
    /// # Errors
    ///
    /// Returns the [`SyntaxError`] for the furthest failure, or for the
    /// nesting limit.
    pub fn parse(&self, source: &str) -> std::result::Result<Expr, SyntaxError> {
        debug!(len = source.len(), "parsing");
        parse_with_max_nesting(source, self.max_nesting)
    }

    /// Type check a tree against the prelude.
    pub fn check(&self, expr: &Expr) -> Checked {
        let checked = check(Some(expr), &self.prelude.type_env());
        debug!(
            ty = ?checked.ty,
            diagnostics = checked.diagnostics.len(),
            "checked"
        );
        checked
    }

    /// Evaluate a tree against the prelude, without checking it first.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if a limit of the context is hit.
    pub fn evaluate(&self, expr: &Expr) -> std::result::Result<Option<Value>, EvalError> {
        let value = evaluate(Some(expr), &self.prelude.value_env(), &self.ctx)?;
        debug!(value = ?value, "evaluated");
        Ok(value)
    }

    /// Run a program through every stage.
    ///
    /// # Errors
    ///
    /// Stops at the first failing stage: a syntax error, the diagnostics of
    /// the check, or an evaluation limit.
    pub fn run(&self, source: &str) -> Result<Evaluation> {
        let expr = self.parse(source)?;
        self.run_expr(&expr)
    }

    /// Check and evaluate a tree that was already parsed.
    ///
    /// # Errors
    ///
    /// The diagnostics of the check, or an evaluation limit.
    pub fn run_expr(&self, expr: &Expr) -> Result<Evaluation> {
        let checked = self.check(expr);
        if !checked.is_ok() {
            return Err(TypeErrors(checked.diagnostics).into());
        }
        let value = self.evaluate(expr)?;
        Ok(Evaluation {
            ty: checked.ty,
            value,
        })
    }
}

/// Run a program with default settings and no global bindings.
///
/// # Errors
///
/// See [`Pipeline::run`].
pub fn run(source: &str) -> Result<Evaluation> {
    Pipeline::new().run(source)
}
