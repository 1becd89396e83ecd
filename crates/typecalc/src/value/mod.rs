//! Value representation for runtime values

mod callable;
mod display;
mod impls;

pub use callable::ClosureValue;

use std::sync::Arc;

/// Runtime value produced by the evaluator.
///
/// The evaluator's "no value" result is `None` in an `Option<Value>`, not a
/// variant of this enum.
#[derive(Clone)]
pub enum Value {
    /// Natural number; `pred` floors at zero so it never goes negative
    Nat(u64),

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Function value with the environment it was created in
    Closure(Arc<ClosureValue>),
}
