//! Grammar rules
//!
//! ```text
//! Program     := _ '('* _ Application _ ')'? _
//! Application := ExprOrAbs Application*      (only the last trailing item is kept)
//! ExprOrAbs   := Expr / Abstraction
//! Expr        := IfThenElse / IsZero / Arith / Zero / True / False / Identifier / Paren
//! Abstraction := _ '('* _ 'λ' _ Identifier ':' Type '→' Application _ ')'? _
//! IfThenElse  := If Application Then Application Else Application
//! IsZero      := IsZeroKw Application
//! Arith       := (Succ / Pred) Application
//! Paren       := _ '(' _ Expr _ ')' _
//! Type        := Nat / Bool
//! Identifier  := !Reserved _ [a-z]+ _
//! ```
//!
//! Every keyword is `_ text _`. The leading parentheses of `Program` and
//! `Abstraction` may be repeated and need not be closed.
//!
//! Every recursive path goes through `Application` or `Paren`, so those two
//! are the rules that count towards the nesting limit.

use super::expected::LOWERCASE;
use super::state::ParseState;
use crate::ast::{ArithOp, BaseType, Expr};

/// Words that can never be identifiers. The check is a prefix match, so
/// `iffy` and `thenceforth` are rejected too.
pub const RESERVED: [&str; 10] = [
    "if", "then", "else", "pred", "succ", "Nat", "Bool", "iszero", "true", "false",
];

pub fn program(state: &mut ParseState) -> Option<Expr> {
    state.attempt(|state| {
        state.skip_ws();
        state.many_literal("(");
        state.skip_ws();
        let expr = application(state)?;
        state.skip_ws();
        state.optional_literal(")");
        state.skip_ws();
        Some(expr)
    })
}

fn application(state: &mut ParseState) -> Option<Expr> {
    state.nested(|state| {
        let head = expr_or_abstraction(state)?;
        let mut trailing = Vec::new();
        while let Some(next) = application(state) {
            trailing.push(next);
        }
        Some(match trailing.pop() {
            Some(right) => Expr::application(head, right),
            None => head,
        })
    })
}

fn expr_or_abstraction(state: &mut ParseState) -> Option<Expr> {
    expr(state).or_else(|| abstraction(state))
}

fn expr(state: &mut ParseState) -> Option<Expr> {
    if_then_else(state)
        .or_else(|| is_zero(state))
        .or_else(|| arithmetic(state))
        .or_else(|| keyword(state, "0").map(|_| Expr::zero()))
        .or_else(|| keyword(state, "true").map(|_| Expr::boolean(true)))
        .or_else(|| keyword(state, "false").map(|_| Expr::boolean(false)))
        .or_else(|| identifier(state).map(Expr::ident))
        .or_else(|| parenthesized(state))
}

fn abstraction(state: &mut ParseState) -> Option<Expr> {
    state.attempt(|state| {
        state.skip_ws();
        state.many_literal("(");
        state.skip_ws();
        state.literal("λ")?;
        state.skip_ws();
        let param = identifier(state)?;
        state.literal(":")?;
        let param_type = type_name(state)?;
        state.literal("→")?;
        let body = application(state)?;
        state.skip_ws();
        state.optional_literal(")");
        state.skip_ws();
        Some(Expr::abstraction(param, param_type, body))
    })
}

fn if_then_else(state: &mut ParseState) -> Option<Expr> {
    state.attempt(|state| {
        keyword(state, "if")?;
        let condition = application(state)?;
        keyword(state, "then")?;
        let then_branch = application(state)?;
        keyword(state, "else")?;
        let else_branch = application(state)?;
        Some(Expr::conditional(condition, then_branch, else_branch))
    })
}

fn is_zero(state: &mut ParseState) -> Option<Expr> {
    state.attempt(|state| {
        keyword(state, "iszero")?;
        let operand = application(state)?;
        Some(Expr::is_zero(operand))
    })
}

fn arithmetic(state: &mut ParseState) -> Option<Expr> {
    state.attempt(|state| {
        let op = keyword(state, "succ")
            .map(|_| ArithOp::Succ)
            .or_else(|| keyword(state, "pred").map(|_| ArithOp::Pred))?;
        let operand = application(state)?;
        Some(Expr::arithmetic(op, operand))
    })
}

fn parenthesized(state: &mut ParseState) -> Option<Expr> {
    state.nested(|state| {
        state.skip_ws();
        state.literal("(")?;
        state.skip_ws();
        let inner = expr(state)?;
        state.skip_ws();
        state.literal(")")?;
        state.skip_ws();
        Some(inner)
    })
}

fn type_name(state: &mut ParseState) -> Option<BaseType> {
    keyword(state, "Nat")
        .map(|_| BaseType::Nat)
        .or_else(|| keyword(state, "Bool").map(|_| BaseType::Bool))
}

fn identifier(state: &mut ParseState) -> Option<String> {
    state.attempt(|state| {
        let reserved = state.lookahead(|state| {
            RESERVED
                .iter()
                .any(|&word| keyword(state, word).is_some())
        });
        if reserved {
            return None;
        }

        state.skip_ws();
        let mut name = String::new();
        name.push(state.class(LOWERCASE)?);
        while let Some(c) = state.class(LOWERCASE) {
            name.push(c);
        }
        state.skip_ws();
        Some(name)
    })
}

/// `_ text _`
fn keyword(state: &mut ParseState, text: &'static str) -> Option<()> {
    state.attempt(|state| {
        state.skip_ws();
        state.literal(text)?;
        state.skip_ws();
        Some(())
    })
}
