//! Two-stack formula evaluation.
//!
//! One stack holds pending operators and open-paren markers, the other holds
//! operands. `*` and `/` are applied eagerly as soon as their right operand
//! arrives; `+` and `-` wait until the next additive operator, closing paren,
//! or end of input. Structural validation at construction guarantees the
//! stack discipline here never underflows.

use super::error::EvalError;
use super::lexer::{Op, Token};

enum Pending {
    Op(Op),
    Paren,
}

pub(super) fn evaluate<L>(tokens: &[Token], mut lookup: L) -> Result<f64, EvalError>
where
    L: FnMut(&str) -> Option<f64>,
{
    let mut ops: Vec<Pending> = Vec::new();
    let mut vals: Vec<f64> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(n) => push_operand(*n, &mut ops, &mut vals)?,
            Token::Var(name) => {
                let value =
                    lookup(name).ok_or_else(|| EvalError::UndefinedVariable(name.clone()))?;
                push_operand(value, &mut ops, &mut vals)?;
            }
            Token::Op(op @ (Op::Add | Op::Sub)) => {
                resolve_additive(&mut ops, &mut vals);
                ops.push(Pending::Op(*op));
            }
            // `*` and `/` wait for their right operand.
            Token::Op(op) => ops.push(Pending::Op(*op)),
            Token::LParen => ops.push(Pending::Paren),
            Token::RParen => {
                resolve_additive(&mut ops, &mut vals);
                ops.pop(); // the matching `(`
                // A `*`/`/` waiting just outside the parenthesis applies to
                // the parenthesized result.
                let inner = pop(&mut vals);
                push_operand(inner, &mut ops, &mut vals)?;
            }
        }
    }

    resolve_additive(&mut ops, &mut vals);
    Ok(pop(&mut vals))
}

/// Push an operand, first applying a pending `*` or `/` from the top of the
/// operator stack. A zero divisor fails here, before anything is pushed.
fn push_operand(value: f64, ops: &mut Vec<Pending>, vals: &mut Vec<f64>) -> Result<(), EvalError> {
    match ops.last() {
        Some(Pending::Op(Op::Mul)) => {
            ops.pop();
            let left = pop(vals);
            vals.push(left * value);
        }
        Some(Pending::Op(Op::Div)) => {
            if value == 0.0 {
                return Err(EvalError::DivideByZero);
            }
            ops.pop();
            let left = pop(vals);
            vals.push(left / value);
        }
        _ => vals.push(value),
    }
    Ok(())
}

/// Apply a pending `+` or `-` to the two most recent operands, if one is on
/// top of the operator stack.
fn resolve_additive(ops: &mut Vec<Pending>, vals: &mut Vec<f64>) {
    if let Some(Pending::Op(op @ (Op::Add | Op::Sub))) = ops.last() {
        let op = *op;
        ops.pop();
        let right = pop(vals);
        let left = pop(vals);
        vals.push(match op {
            Op::Add => left + right,
            _ => left - right,
        });
    }
}

fn pop(vals: &mut Vec<f64>) -> f64 {
    vals.pop().expect("operand stack underflow in a validated formula")
}
