//! Error types for parsing, checking and evaluation
//!
//! The three stages report through disjoint types: a [`SyntaxError`] stops the
//! pipeline before checking, [`TypeErrors`] collects every diagnostic of one
//! check, and [`EvalError`] only covers limits imposed by the host.

use serde::Serialize;
use thiserror::Error;

use crate::check::Diagnostic;
use crate::parser::Expectation;
use crate::types::Type;

/// A point in the source text.
///
/// Offsets count Unicode scalar values; lines and columns are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Character offset from the start of the input
    pub offset: usize,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

/// A half-open span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// First character of the span
    pub start: Position,

    /// One past the last character of the span
    pub end: Position,
}

/// Parse failure at the furthest position any alternative reached.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct SyntaxError {
    /// `Expected ... but ... found.`, or the nesting limit that was hit
    pub message: String,

    /// Everything that would have let the parse continue, deduplicated
    pub expected: Vec<Expectation>,

    /// The character at the failure point, `None` at end of input
    pub found: Option<char>,

    /// Where the failure happened
    pub location: Location,
}

/// Errors raised while building environments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvironmentError {
    /// A prelude value does not have its declared type
    #[error("binding `{name}` is declared as {expected} but holds a {found}")]
    TypeMismatch {
        /// Binding name
        name: String,
        /// Declared type
        expected: Type,
        /// Type of the supplied value, or a description when it has none
        found: String,
    },
}

/// Errors that stop an evaluation early.
///
/// A program that checks without diagnostics always evaluates; these only
/// arise from limits the host sets on the [`EvalContext`](crate::EvalContext).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The interrupt flag was raised
    #[error("evaluation interrupted")]
    Interrupted,

    /// Too many nested closure invocations
    #[error("call depth {depth} exceeds the limit of {max}")]
    CallDepthExceeded {
        /// Depth that was about to be entered
        depth: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Every diagnostic of one type check, in the order they were found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_messages(.0))]
pub struct TypeErrors(pub Vec<Diagnostic>);

impl TypeErrors {
    /// The diagnostic messages.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

fn join_messages(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(". ")
}

/// Any failure of the parse-check-evaluate pipeline.
#[derive(Error, Debug, Clone)]
pub enum CalcError {
    /// The program did not parse
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The program parsed but did not type check
    #[error(transparent)]
    Type(#[from] TypeErrors),

    /// Evaluation was cut short
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ArithOp;

    #[test]
    fn test_type_errors_join_with_periods() {
        let errors = TypeErrors(vec![
            Diagnostic::ArithmeticOperand(ArithOp::Succ),
            Diagnostic::BodyUntyped,
        ]);
        assert_eq!(
            errors.to_string(),
            "Incorrect type of succ. Incorrect type of the body"
        );
    }

    #[test]
    fn test_eval_error_display() {
        let err = EvalError::CallDepthExceeded { depth: 4, max: 3 };
        assert_eq!(err.to_string(), "call depth 4 exceeds the limit of 3");
        assert_eq!(EvalError::Interrupted.to_string(), "evaluation interrupted");
    }

    #[test]
    fn test_calc_error_is_transparent() {
        let err = CalcError::from(TypeErrors(vec![Diagnostic::IsZeroOperand]));
        assert_eq!(err.to_string(), "Incorrect type of IsZero");
    }

    #[test]
    fn test_environment_error_display() {
        let err = EnvironmentError::TypeMismatch {
            name: "x".to_string(),
            expected: Type::Nat,
            found: "Bool".to_string(),
        };
        assert_eq!(err.to_string(), "binding `x` is declared as Nat but holds a Bool");
    }
}
