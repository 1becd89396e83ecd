//! Static type checking
//!
//! The checker computes a type for a tree bottom-up and collects every
//! diagnostic it can reach instead of stopping at the first. A node gets a
//! type only when it has no error of its own; a missing type is not itself an
//! error and simply propagates upward until some rule needs it.

mod diagnostic;

pub use diagnostic::Diagnostic;

use crate::ast::{Expr, ExprAbs, ExprApp, ExprArith, ExprIf, ExprIsZero, LiteralValue};
use crate::environment::Environment;
use crate::types::Type;

/// Outcome of checking one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked {
    /// Type of the root, if it has one
    pub ty: Option<Type>,

    /// Every diagnostic, children before parents and left before right
    pub diagnostics: Vec<Diagnostic>,
}

impl Checked {
    /// Check if no diagnostic was produced.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The diagnostic messages in order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }
}

/// Type check a tree under an environment of known names.
///
/// An absent tree has no type and no diagnostics.
///
/// # Example
///
/// ```
/// use typecalc::{check, parse, Environment, Type};
///
/// let expr = parse("λx:Nat→iszero x").unwrap();
/// let checked = check(Some(&expr), &Environment::new());
/// assert!(checked.is_ok());
/// assert_eq!(checked.ty, Some(Type::arrow(Type::Nat, Type::Bool)));
/// ```
pub fn check(expr: Option<&Expr>, env: &Environment<Type>) -> Checked {
    let mut diagnostics = Vec::new();
    let ty = infer(expr, env, &mut diagnostics);
    Checked { ty, diagnostics }
}

fn infer(expr: Option<&Expr>, env: &Environment<Type>, out: &mut Vec<Diagnostic>) -> Option<Type> {
    let expr = expr?;
    match expr {
        Expr::Literal(lit) => match lit.value {
            LiteralValue::Nat(0) => Some(Type::Nat),
            LiteralValue::Bool(_) => Some(Type::Bool),
            LiteralValue::Nat(_) => report(out, Diagnostic::UnknownLiteral),
        },
        // Unbound names have no type; whatever uses them reports it
        Expr::Identifier(id) => env.get(&id.name).cloned(),
        Expr::Conditional(cond) => infer_conditional(cond, env, out),
        Expr::Abstraction(abs) => infer_abstraction(abs, env, out),
        Expr::IsZero(is_zero) => infer_is_zero(is_zero, env, out),
        Expr::Arithmetic(arith) => infer_arithmetic(arith, env, out),
        Expr::Application(app) => infer_application(app, env, out),
        Expr::Unknown => None,
    }
}

fn report(out: &mut Vec<Diagnostic>, diagnostic: Diagnostic) -> Option<Type> {
    out.push(diagnostic);
    None
}

// ═══════════════════════════════════════════════════════════════════════
// Rules
// ═══════════════════════════════════════════════════════════════════════

fn infer_conditional(
    cond: &ExprIf,
    env: &Environment<Type>,
    out: &mut Vec<Diagnostic>,
) -> Option<Type> {
    let (Some(condition), Some(then_branch), Some(else_branch)) = (
        cond.condition.as_deref(),
        cond.then_branch.as_deref(),
        cond.else_branch.as_deref(),
    ) else {
        return report(out, Diagnostic::MissingConditionalPart);
    };

    if infer(Some(condition), env, out) != Some(Type::Bool) {
        return report(out, Diagnostic::ConditionNotBool);
    }

    let then_ty = infer(Some(then_branch), env, out);
    let else_ty = infer(Some(else_branch), env, out);
    match (then_ty, else_ty) {
        (Some(then_ty), Some(else_ty)) if then_ty == else_ty => Some(then_ty),
        _ => report(out, Diagnostic::BranchMismatch),
    }
}

fn infer_abstraction(
    abs: &ExprAbs,
    env: &Environment<Type>,
    out: &mut Vec<Diagnostic>,
) -> Option<Type> {
    let Some(body) = abs.body.as_deref() else {
        return report(out, Diagnostic::MissingBody);
    };

    let param_ty = Type::from(abs.param_type);
    let inner = env.bind(abs.param.as_str(), param_ty.clone());
    match infer(Some(body), &inner, out) {
        Some(body_ty) => Some(Type::arrow(param_ty, body_ty)),
        None => report(out, Diagnostic::BodyUntyped),
    }
}

fn infer_is_zero(
    is_zero: &ExprIsZero,
    env: &Environment<Type>,
    out: &mut Vec<Diagnostic>,
) -> Option<Type> {
    match infer(is_zero.expr.as_deref(), env, out) {
        Some(Type::Nat) => Some(Type::Bool),
        _ => report(out, Diagnostic::IsZeroOperand),
    }
}

fn infer_arithmetic(
    arith: &ExprArith,
    env: &Environment<Type>,
    out: &mut Vec<Diagnostic>,
) -> Option<Type> {
    match infer(arith.expr.as_deref(), env, out) {
        Some(Type::Nat) => Some(Type::Nat),
        _ => report(out, Diagnostic::ArithmeticOperand(arith.op)),
    }
}

fn infer_application(
    app: &ExprApp,
    env: &Environment<Type>,
    out: &mut Vec<Diagnostic>,
) -> Option<Type> {
    let left_ty = infer(app.left.as_deref(), env, out);
    let right_ty = infer(app.right.as_deref(), env, out);

    let (param, result) = left_ty.as_ref()?.as_arrow()?;
    if app.right.is_some() && right_ty.as_ref() != Some(param) {
        return report(out, Diagnostic::Application);
    }
    Some(result.clone())
}
