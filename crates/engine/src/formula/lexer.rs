//! Formula tokenizer.
//!
//! Scans an infix expression into tokens: parentheses, the four binary
//! operators, variables (a letter followed by letters/digits), and
//! non-negative numeric literals (integer, decimal, optional lowercase-`e`
//! exponent). Whitespace separates tokens and is dropped. Anything else is a
//! malformed token.

use super::error::ParseError;

/// One of the four binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

/// A single retained formula token.
///
/// Numbers are canonicalized at scan time: the token holds the parsed value
/// and renders through `f64`'s `Display`, so `2.5e9` and `2500000000` are the
/// same token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Var(String),
    Op(Op),
    LParen,
    RParen,
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                tokens.push(Token::Op(Op::Add));
                chars.next();
            }
            '-' => {
                tokens.push(Token::Op(Op::Sub));
                chars.next();
            }
            '*' => {
                tokens.push(Token::Op(Op::Mul));
                chars.next();
            }
            '/' => {
                tokens.push(Token::Op(Op::Div));
                chars.next();
            }
            '(' => {
                tokens.push(Token::LParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RParen);
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut text = String::new();
                let mut saw_digit = false;
                while let Some(&ch) = chars.peek() {
                    if ch.is_ascii_digit() {
                        saw_digit = true;
                        text.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if chars.peek() == Some(&'.') {
                    text.push('.');
                    chars.next();
                    while let Some(&ch) = chars.peek() {
                        if ch.is_ascii_digit() {
                            saw_digit = true;
                            text.push(ch);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                }
                // A bare "." is not a number.
                if !saw_digit {
                    return Err(ParseError::BadToken('.'));
                }
                // Optional exponent: lowercase `e`, optional sign, at least
                // one digit. Only consumed when the whole suffix is present,
                // so "2e" lexes as the number 2 followed by the variable "e".
                if chars.peek() == Some(&'e') {
                    let mut lookahead = chars.clone();
                    lookahead.next(); // skip 'e'
                    let mut suffix = String::from("e");
                    if let Some(&sign) = lookahead.peek() {
                        if sign == '+' || sign == '-' {
                            suffix.push(sign);
                            lookahead.next();
                        }
                    }
                    let mut exp_digits = false;
                    while let Some(&ch) = lookahead.peek() {
                        if ch.is_ascii_digit() {
                            exp_digits = true;
                            suffix.push(ch);
                            lookahead.next();
                        } else {
                            break;
                        }
                    }
                    if exp_digits {
                        text.push_str(&suffix);
                        chars = lookahead;
                    }
                }
                let value: f64 = text
                    .parse()
                    .map_err(|_| ParseError::UnexpectedToken(text.clone()))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() => {
                let mut ident = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_ascii_alphanumeric() {
                        ident.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Var(ident));
            }
            other => return Err(ParseError::BadToken(other)),
        }
    }

    Ok(tokens)
}
