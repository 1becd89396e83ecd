//! Abstract syntax tree for typed-calculus programs
//!
//! The parser builds one [`Expr`] tree per program. Trees are immutable once
//! built and strictly tree-shaped. Children sit behind `Arc` so that a closure
//! can hold on to its body without copying the subtree.
//!
//! Child positions are `Option<Arc<Expr>>`. The parser always fills them, but
//! a host may also hand in a tree deserialized from JSON (internally tagged by
//! `"type"`), where any child can be missing and unknown node tags map to
//! [`Expr::Unknown`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A node of the program tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expr {
    /// `0`, `true` or `false`
    Literal(ExprLiteral),

    /// A variable reference
    Identifier(ExprIdent),

    /// `λx:T→body`
    Abstraction(ExprAbs),

    /// Juxtaposition `f a`
    Application(ExprApp),

    /// `succ e` / `pred e`
    Arithmetic(ExprArith),

    /// `iszero e`
    IsZero(ExprIsZero),

    /// `if c then t else e`
    Conditional(ExprIf),

    /// A node with a tag this crate does not know (only from deserialized trees)
    #[serde(other)]
    Unknown,
}

/// Literal payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// Boolean constant
    Bool(bool),

    /// Natural-number constant; source text can only spell `0`
    Nat(u64),
}

/// Successor or predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithOp {
    /// `succ`
    Succ,
    /// `pred`
    Pred,
}

/// The annotation forms allowed on an abstraction parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    /// `Nat`
    Nat,
    /// `Bool`
    Bool,
}

/// Literal node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprLiteral {
    /// The constant
    pub value: LiteralValue,
}

/// Identifier node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprIdent {
    /// Lowercase name, never a reserved word when produced by the parser
    pub name: String,
}

/// Abstraction node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprAbs {
    /// Parameter name
    pub param: String,

    /// Declared parameter type
    pub param_type: BaseType,

    /// Function body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Arc<Expr>>,
}

/// Application node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprApp {
    /// Function position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Arc<Expr>>,

    /// Argument position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Arc<Expr>>,
}

/// Arithmetic node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprArith {
    /// `succ` or `pred`
    pub op: ArithOp,

    /// Operand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expr: Option<Arc<Expr>>,
}

/// Zero-test node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprIsZero {
    /// Operand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expr: Option<Arc<Expr>>,
}

/// Conditional node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprIf {
    /// Condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Arc<Expr>>,

    /// Taken when the condition holds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub then_branch: Option<Arc<Expr>>,

    /// Taken otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub else_branch: Option<Arc<Expr>>,
}

// ═══════════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════════

impl Expr {
    /// The natural-number literal `0`.
    pub fn zero() -> Self {
        Expr::Literal(ExprLiteral {
            value: LiteralValue::Nat(0),
        })
    }

    /// A boolean literal.
    pub fn boolean(value: bool) -> Self {
        Expr::Literal(ExprLiteral {
            value: LiteralValue::Bool(value),
        })
    }

    /// A variable reference.
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(ExprIdent { name: name.into() })
    }

    /// `λparam:param_type→body`
    pub fn abstraction(param: impl Into<String>, param_type: BaseType, body: Expr) -> Self {
        Expr::Abstraction(ExprAbs {
            param: param.into(),
            param_type,
            body: Some(Arc::new(body)),
        })
    }

    /// `left right`
    pub fn application(left: Expr, right: Expr) -> Self {
        Expr::Application(ExprApp {
            left: Some(Arc::new(left)),
            right: Some(Arc::new(right)),
        })
    }

    /// `succ expr` or `pred expr`
    pub fn arithmetic(op: ArithOp, expr: Expr) -> Self {
        Expr::Arithmetic(ExprArith {
            op,
            expr: Some(Arc::new(expr)),
        })
    }

    /// `succ expr`
    pub fn succ(expr: Expr) -> Self {
        Self::arithmetic(ArithOp::Succ, expr)
    }

    /// `pred expr`
    pub fn pred(expr: Expr) -> Self {
        Self::arithmetic(ArithOp::Pred, expr)
    }

    /// `iszero expr`
    pub fn is_zero(expr: Expr) -> Self {
        Expr::IsZero(ExprIsZero {
            expr: Some(Arc::new(expr)),
        })
    }

    /// `if condition then then_branch else else_branch`
    pub fn conditional(condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::Conditional(ExprIf {
            condition: Some(Arc::new(condition)),
            then_branch: Some(Arc::new(then_branch)),
            else_branch: Some(Arc::new(else_branch)),
        })
    }
}

impl ArithOp {
    /// The keyword spelling.
    pub fn keyword(self) -> &'static str {
        match self {
            ArithOp::Succ => "succ",
            ArithOp::Pred => "pred",
        }
    }
}

impl BaseType {
    /// The keyword spelling.
    pub fn keyword(self) -> &'static str {
        match self {
            BaseType::Nat => "Nat",
            BaseType::Bool => "Bool",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Surface Syntax
// ═══════════════════════════════════════════════════════════════════════

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Bool(b) => write!(f, "{}", b),
            LiteralValue::Nat(n) => write!(f, "{}", n),
        }
    }
}

/// Prints source text that parses back to the same tree for any tree the
/// parser can build. Missing children print as `_` and unknown nodes as `?`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{}", lit.value),
            Expr::Identifier(id) => f.write_str(&id.name),
            Expr::Abstraction(abs) => {
                write!(f, "(λ{}:{}→", abs.param, abs.param_type)?;
                fmt_child(f, abs.body.as_deref())?;
                f.write_str(")")
            }
            Expr::Application(app) => {
                // Application associates to the right, so a left operand that
                // extends greedily must be wrapped.
                match app.left.as_deref() {
                    Some(
                        left @ (Expr::Arithmetic(_) | Expr::IsZero(_) | Expr::Conditional(_)),
                    ) => write!(f, "({})", left)?,
                    other => fmt_child(f, other)?,
                }
                f.write_str(" ")?;
                fmt_child(f, app.right.as_deref())
            }
            Expr::Arithmetic(arith) => {
                write!(f, "{} ", arith.op)?;
                fmt_child(f, arith.expr.as_deref())
            }
            Expr::IsZero(is_zero) => {
                f.write_str("iszero ")?;
                fmt_child(f, is_zero.expr.as_deref())
            }
            Expr::Conditional(cond) => {
                f.write_str("if ")?;
                fmt_child(f, cond.condition.as_deref())?;
                f.write_str(" then ")?;
                fmt_child(f, cond.then_branch.as_deref())?;
                f.write_str(" else ")?;
                fmt_child(f, cond.else_branch.as_deref())
            }
            Expr::Unknown => f.write_str("?"),
        }
    }
}

fn fmt_child(f: &mut fmt::Formatter<'_>, child: Option<&Expr>) -> fmt::Result {
    match child {
        Some(expr) => write!(f, "{}", expr),
        None => f.write_str("_"),
    }
}
