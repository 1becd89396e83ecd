//! Static types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ast::BaseType;

/// A type of the calculus.
///
/// Equality is structural: arrows are equal when both components are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// Natural numbers
    Nat,

    /// Booleans
    Bool,

    /// Functions from the first type to the second
    Arrow(Box<Type>, Box<Type>),
}

impl Type {
    /// Build `param → result`.
    pub fn arrow(param: Type, result: Type) -> Self {
        Type::Arrow(Box::new(param), Box::new(result))
    }

    /// Check if this is a function type.
    pub fn is_arrow(&self) -> bool {
        matches!(self, Type::Arrow(_, _))
    }

    /// Split a function type into parameter and result.
    pub fn as_arrow(&self) -> Option<(&Type, &Type)> {
        match self {
            Type::Arrow(param, result) => Some((param.as_ref(), result.as_ref())),
            _ => None,
        }
    }
}

impl From<BaseType> for Type {
    fn from(base: BaseType) -> Self {
        match base {
            BaseType::Nat => Type::Nat,
            BaseType::Bool => Type::Bool,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Nat => f.write_str("Nat"),
            Type::Bool => f.write_str("Bool"),
            Type::Arrow(param, result) => write!(f, "({} → {})", param, result),
        }
    }
}
