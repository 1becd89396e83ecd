//! Lexical environments shared by the type checker and the evaluator

mod frame;
mod prelude;

pub use frame::Frame;
pub use prelude::Prelude;

use std::sync::Arc;

/// A persistent chain of scopes mapping names to payloads.
///
/// The checker uses `Environment<Type>`, the evaluator `Environment<Value>`.
/// Extending an environment never mutates it: [`bind`](Self::bind) and
/// [`with_scope`](Self::with_scope) return a new chain that shares every
/// existing frame with the receiver. A closure can therefore keep the chain
/// that was active when it was created, and each call layers its own scope on
/// top without anyone else observing it.
///
/// # Example
///
/// ```
/// use typecalc::{Environment, Value};
///
/// let global = Environment::new().bind("x", Value::Nat(1));
///
/// // Enter a new scope
/// let inner = global.bind("y", Value::Nat(2)).bind("x", Value::Nat(10));
///
/// assert_eq!(inner.get("x"), Some(&Value::Nat(10))); // Gets inner x
/// assert_eq!(inner.get("y"), Some(&Value::Nat(2)));
///
/// // The outer chain is untouched
/// assert_eq!(global.get("x"), Some(&Value::Nat(1)));
/// assert_eq!(global.get("y"), None);
/// ```
#[derive(Debug)]
pub struct Environment<T> {
    /// Innermost frame
    head: Option<Arc<Frame<T>>>,

    /// Number of closure invocations in progress when this chain was built
    call_depth: usize,
}

impl<T> Clone for Environment<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            call_depth: self.call_depth,
        }
    }
}

impl<T> Default for Environment<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Environment<T> {
    /// Create an environment with no scopes.
    pub fn new() -> Self {
        Self {
            head: None,
            call_depth: 0,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Scope Extension
    // ═══════════════════════════════════════════════════════════════════

    /// Extend with a new scope holding a single binding.
    pub fn bind(&self, name: impl Into<String>, payload: T) -> Self {
        self.push(Frame::single(name.into(), payload))
    }

    /// Extend with a new scope holding several bindings.
    ///
    /// Later entries with the same name replace earlier ones inside the scope.
    pub fn with_scope<N, I>(&self, bindings: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, T)>,
    {
        self.push(
            bindings
                .into_iter()
                .map(|(name, payload)| (name.into(), payload))
                .collect(),
        )
    }

    fn push(&self, frame: Frame<T>) -> Self {
        Self {
            head: Some(Arc::new(frame.with_parent(self.head.clone()))),
            call_depth: self.call_depth,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Call Depth Tracking
    // ═══════════════════════════════════════════════════════════════════

    /// Get the recorded call depth.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// The same chain with a different recorded call depth.
    pub fn with_call_depth(&self, call_depth: usize) -> Self {
        Self {
            head: self.head.clone(),
            call_depth,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a name, innermost scope first.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.frames().find_map(|frame| frame.get(name))
    }

    /// Check if a name is bound in any scope.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Check if a name is bound in the innermost scope only.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        self.head
            .as_deref()
            .is_some_and(|frame| frame.get(name).is_some())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over the scopes, innermost first.
    pub fn frames(&self) -> impl Iterator<Item = &Frame<T>> {
        std::iter::successors(self.head.as_deref(), |frame| frame.parent())
    }

    /// Iterate over every binding, innermost scope first.
    ///
    /// Shadowed bindings are included after the bindings that shadow them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.frames().flat_map(|frame| frame.iter())
    }

    /// All bound names, innermost scope first.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(name, _)| name).collect()
    }

    /// Number of scopes in the chain.
    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    /// Total number of bindings, shadowed ones included.
    pub fn len(&self) -> usize {
        self.frames().map(Frame::len).sum()
    }

    /// Check if there are no bindings at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let env: Environment<u32> = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.depth(), 0);
        assert_eq!(env.get("x"), None);
    }

    #[test]
    fn test_bind_does_not_touch_receiver() {
        let outer = Environment::new().bind("x", 1);
        let inner = outer.bind("y", 2);

        assert!(inner.contains("x"));
        assert!(inner.contains("y"));
        assert!(!outer.contains("y"));
        assert_eq!(outer.depth(), 1);
        assert_eq!(inner.depth(), 2);
    }

    #[test]
    fn test_siblings_are_isolated() {
        let root = Environment::new().bind("a", 0);
        let left = root.bind("l", 1);
        let right = root.bind("r", 2);

        assert!(left.contains("l"));
        assert!(!left.contains("r"));
        assert!(right.contains("r"));
        assert!(!right.contains("l"));
    }

    #[test]
    fn test_shadowing_innermost_wins() {
        let env = Environment::new().bind("x", 1).bind("x", 2);
        assert_eq!(env.get("x"), Some(&2));
        assert_eq!(env.len(), 2);
        assert_eq!(env.names(), vec!["x", "x"]);
    }

    #[test]
    fn test_with_scope_single_frame() {
        let env = Environment::new().with_scope([("a", 1), ("b", 2)]);
        assert_eq!(env.depth(), 1);
        assert!(env.contains_in_current_scope("a"));
        assert!(env.contains_in_current_scope("b"));

        let inner = env.bind("c", 3);
        assert!(!inner.contains_in_current_scope("a"));
        assert!(inner.contains("a"));
    }

    #[test]
    fn test_call_depth_is_carried() {
        let env = Environment::new().bind("x", 1).with_call_depth(3);
        assert_eq!(env.call_depth(), 3);
        assert_eq!(env.bind("y", 2).call_depth(), 3);
        assert_eq!(env.get("x"), Some(&1));
    }
}
