//! Evaluation context configuration

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Configuration and state for evaluation.
///
/// This is passed through all evaluation calls and controls
/// behavior like nested-call limits and interruption.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum number of nested closure invocations
    pub max_call_depth: usize,

    /// Interrupt flag - set to true to abort evaluation
    pub interrupt: Arc<AtomicBool>,

    /// Whether to trace closure invocations
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_call_depth: 1000,
            interrupt: Arc::new(AtomicBool::new(false)),
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom call depth limit.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Self {
            max_call_depth: max_depth,
            ..Default::default()
        }
    }

    /// Enable or disable invocation tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Check if evaluation has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request interruption of evaluation.
    ///
    /// Clones share the flag, so a host can keep one clone and interrupt an
    /// evaluation running with another.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Reset the interrupt flag.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = EvalContext::new();
        assert_eq!(ctx.max_call_depth, 1000);
        assert!(!ctx.trace);
        assert!(!ctx.is_interrupted());
    }

    #[test]
    fn test_interrupt_is_shared_between_clones() {
        let ctx = EvalContext::with_max_call_depth(10);
        let handle = ctx.clone();
        handle.interrupt();
        assert!(ctx.is_interrupted());
        ctx.reset_interrupt();
        assert!(!handle.is_interrupted());
    }

    #[test]
    fn test_with_trace() {
        assert!(EvalContext::new().with_trace(true).trace);
    }
}
