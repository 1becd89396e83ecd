//! # Typecalc
//!
//! A simply-typed lambda calculus with booleans, natural numbers, `succ`,
//! `pred`, `iszero` and `if`.
//!
//! Programs go through three independent passes over one tree:
//!
//! - **Parser**: source text to [`Expr`], or a [`SyntaxError`] naming what
//!   was expected at the furthest point reached
//! - **Checker**: a [`Type`] for the tree plus every [`Diagnostic`] found
//! - **Evaluator**: a [`Value`] computed under a persistent [`Environment`]
//!
//! [`Pipeline`] chains them and only evaluates programs that check cleanly.
//!
//! ```
//! use typecalc::run;
//!
//! let result = run("(λf:Nat→iszero f) pred succ 0").unwrap();
//! assert_eq!(result.to_string(), "true");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod check;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod parser;
pub mod pipeline;
pub mod types;
pub mod value;

// Re-export main types
pub use ast::{ArithOp, BaseType, Expr, LiteralValue};
pub use check::{check, Checked, Diagnostic};
pub use context::EvalContext;
pub use environment::{Environment, Frame, Prelude};
pub use error::{
    CalcError, EnvironmentError, EvalError, Location, Position, Result, SyntaxError, TypeErrors,
};
pub use eval::{evaluate, Evaluate};
pub use parser::{parse, parse_with_max_nesting, Expectation, DEFAULT_MAX_NESTING};
pub use pipeline::{run, Evaluation, Pipeline};
pub use types::Type;
pub use value::{ClosureValue, Value};

/// Typecalc version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
