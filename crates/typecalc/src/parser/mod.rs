//! Backtracking recursive-descent parser
//!
//! Rules are ordered choices: each alternative is tried from the same cursor
//! position and the first that matches wins. When nothing matches, the error
//! reports what was expected at the furthest position any alternative got to.

mod expected;
mod grammar;
mod state;

pub use expected::{ClassPart, Expectation};
pub use grammar::RESERVED;

use crate::ast::Expr;
use crate::error::SyntaxError;
use state::ParseState;

/// Deepest rule nesting [`parse`] accepts.
pub const DEFAULT_MAX_NESTING: usize = 128;

/// Parse one complete program.
///
/// # Errors
///
/// Returns a [`SyntaxError`] when no rule matches, or when a program matched
/// but input is left over (reported as expecting the end of input there).
/// Programs nesting deeper than [`DEFAULT_MAX_NESTING`] are rejected.
///
/// # Example
///
/// ```
/// use typecalc::{parse, Expr};
///
/// let expr = parse("succ 0").unwrap();
/// assert_eq!(expr, Expr::succ(Expr::zero()));
///
/// let err = parse("").unwrap_err();
/// assert_eq!(err.found, None);
/// ```
pub fn parse(source: &str) -> Result<Expr, SyntaxError> {
    parse_with_max_nesting(source, DEFAULT_MAX_NESTING)
}

/// Parse one complete program, allowing at most `max_nesting` nested
/// applications and parentheses.
///
/// # Errors
///
/// Same as [`parse`], with `max_nesting` as the limit.
pub fn parse_with_max_nesting(source: &str, max_nesting: usize) -> Result<Expr, SyntaxError> {
    let mut state = ParseState::new(source, max_nesting);
    match grammar::program(&mut state) {
        Some(expr) if state.at_end() => Ok(expr),
        Some(_) => {
            state.expect(Expectation::End);
            Err(state.into_error())
        }
        None => Err(state.into_error()),
    }
}
