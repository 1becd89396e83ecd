//! Host-provided global bindings

use indexmap::IndexMap;

use super::Environment;
use crate::error::EnvironmentError;
use crate::types::Type;
use crate::value::Value;

/// Named values a host makes visible to every program, each with the type the
/// checker should assume for it.
///
/// The prelude produces one root scope for each pass: [`type_env`] for the
/// checker and [`value_env`] for the evaluator. Both list the bindings in the
/// order they were defined.
///
/// [`type_env`]: Self::type_env
/// [`value_env`]: Self::value_env
#[derive(Debug, Clone, Default)]
pub struct Prelude {
    bindings: IndexMap<String, (Type, Value)>,
}

impl Prelude {
    /// Create an empty prelude.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) a binding.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::TypeMismatch`] if the value's static type
    /// (see [`Value::static_type`]) is not the declared type, including when
    /// the value has no static type at all.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        ty: Type,
        value: Value,
    ) -> Result<&mut Self, EnvironmentError> {
        let name = name.into();
        match value.static_type() {
            Some(found) if found == ty => {
                self.bindings.insert(name, (ty, value));
                Ok(self)
            }
            found => Err(EnvironmentError::TypeMismatch {
                name,
                expected: ty,
                found: match found {
                    Some(found) => found.to_string(),
                    None => format!("{} without a type", value.type_name()),
                },
            }),
        }
    }

    /// Builder form of [`define`](Self::define).
    ///
    /// # Errors
    ///
    /// Same as [`define`](Self::define).
    pub fn with(
        mut self,
        name: impl Into<String>,
        ty: Type,
        value: Value,
    ) -> Result<Self, EnvironmentError> {
        self.define(name, ty, value)?;
        Ok(self)
    }

    /// Look up a binding.
    pub fn get(&self, name: &str) -> Option<(&Type, &Value)> {
        self.bindings.get(name).map(|(ty, value)| (ty, value))
    }

    /// Environment of declared types, for the checker.
    pub fn type_env(&self) -> Environment<Type> {
        self.root(|(ty, _)| ty.clone())
    }

    /// Environment of values, for the evaluator.
    pub fn value_env(&self) -> Environment<Value> {
        self.root(|(_, value)| value.clone())
    }

    fn root<T>(&self, project: impl Fn(&(Type, Value)) -> T) -> Environment<T> {
        if self.bindings.is_empty() {
            return Environment::new();
        }
        Environment::new().with_scope(
            self.bindings
                .iter()
                .map(|(name, binding)| (name.clone(), project(binding))),
        )
    }

    /// Defined names in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if nothing is defined.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
