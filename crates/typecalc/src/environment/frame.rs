//! A single scope in an environment chain

use std::sync::Arc;

use indexmap::IndexMap;

/// One lexical scope: bindings in insertion order plus a link to the
/// enclosing scope.
///
/// Frames are immutable once they are linked into an
/// [`Environment`](super::Environment).
#[derive(Debug)]
pub struct Frame<T> {
    bindings: IndexMap<String, T>,
    parent: Option<Arc<Frame<T>>>,
}

impl<T> Frame<T> {
    pub(super) fn single(name: String, payload: T) -> Self {
        let mut bindings = IndexMap::with_capacity(1);
        bindings.insert(name, payload);
        Self {
            bindings,
            parent: None,
        }
    }

    pub(super) fn with_parent(mut self, parent: Option<Arc<Frame<T>>>) -> Self {
        self.parent = parent;
        self
    }

    /// Look up a name in this scope only.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.bindings.get(name)
    }

    /// The enclosing scope.
    pub fn parent(&self) -> Option<&Frame<T>> {
        self.parent.as_deref()
    }

    /// Bindings of this scope in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.bindings.iter().map(|(name, payload)| (name.as_str(), payload))
    }

    /// Number of bindings in this scope.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if this scope has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<T> FromIterator<(String, T)> for Frame<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
            parent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_binding() {
        let frame = Frame::single("x".to_string(), 7);
        assert_eq!(frame.get("x"), Some(&7));
        assert_eq!(frame.len(), 1);
        assert!(frame.parent().is_none());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let frame: Frame<u8> = [("b".to_string(), 2), ("a".to_string(), 1)]
            .into_iter()
            .collect();
        let names: Vec<&str> = frame.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_names_keep_last_value() {
        let frame: Frame<u8> = [("a".to_string(), 1), ("a".to_string(), 2)]
            .into_iter()
            .collect();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.get("a"), Some(&2));
    }

    #[test]
    fn test_parent_link() {
        let parent = Arc::new(Frame::single("x".to_string(), 1));
        let child = Frame::single("y".to_string(), 2).with_parent(Some(parent));
        assert_eq!(child.parent().and_then(|p| p.get("x")), Some(&1));
        assert_eq!(child.get("x"), None);
    }
}
