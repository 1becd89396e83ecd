//! Type-check diagnostics

use thiserror::Error;

use crate::ast::ArithOp;

/// A non-fatal type error.
///
/// The display strings are the messages a host shows to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// A literal that is neither `0` nor a boolean
    #[error("Unknown type literal")]
    UnknownLiteral,

    /// A conditional missing its condition or a branch
    #[error("No condition for a conditional expression")]
    MissingConditionalPart,

    /// The condition is not a `Bool`
    #[error("Incorrect type of condition of condition")]
    ConditionNotBool,

    /// The branches have different types, or neither has one
    #[error("Incorrect type of then/else branches")]
    BranchMismatch,

    /// An abstraction without a body
    #[error("No body of a function")]
    MissingBody,

    /// The body of an abstraction has no type
    #[error("Incorrect type of the body")]
    BodyUntyped,

    /// `iszero` of something other than a `Nat`
    #[error("Incorrect type of IsZero")]
    IsZeroOperand,

    /// `succ`/`pred` of something other than a `Nat`
    #[error("Incorrect type of {0}")]
    ArithmeticOperand(ArithOp),

    /// The argument does not have the parameter type
    #[error("Incorrect type of application")]
    Application,
}
