//! Closure values

use std::sync::Arc;

use super::Value;
use crate::ast::{BaseType, Expr};
use crate::environment::Environment;

/// A function value together with the environment it captured.
///
/// The body is shared with the program tree, so a closure stays valid after
/// the tree is dropped and creating one never copies a subtree.
#[derive(Debug, Clone)]
pub struct ClosureValue {
    /// Parameter name
    pub param: String,

    /// Declared parameter type
    pub param_type: BaseType,

    /// The function body; `None` for abstractions that had no body
    pub body: Option<Arc<Expr>>,

    /// Scope chain active where the abstraction was evaluated
    pub captured: Environment<Value>,
}

impl ClosureValue {
    /// Create a new closure value
    pub fn new(
        param: impl Into<String>,
        param_type: BaseType,
        body: Option<Arc<Expr>>,
        captured: Environment<Value>,
    ) -> Self {
        Self {
            param: param.into(),
            param_type,
            body,
            captured,
        }
    }
}
