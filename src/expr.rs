//! A Lisp-like prefix arithmetic grammar: `( <op> <expr> <expr> )` with
//! numeric leaves. The second in-tree consumer of the combinator core,
//! showing a grammar whose every rule recurses through the root rule.

use crate::combinator::{double_number, expect_char, padded};
use crate::parser::Parser;
use std::rc::Rc;

/// An evaluable expression tree. Operands are reference-counted so `Expr`
/// stays cheap to clone through parser closures.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Value(f64),
    Add(Rc<Expr>, Rc<Expr>),
    Sub(Rc<Expr>, Rc<Expr>),
    Mul(Rc<Expr>, Rc<Expr>),
    Div(Rc<Expr>, Rc<Expr>),
}

impl Expr {
    pub fn eval(&self) -> f64 {
        match self {
            Expr::Value(value) => *value,
            Expr::Add(left, right) => left.eval() + right.eval(),
            Expr::Sub(left, right) => left.eval() - right.eval(),
            Expr::Mul(left, right) => left.eval() * right.eval(),
            Expr::Div(left, right) => left.eval() / right.eval(),
        }
    }
}

pub fn value_expr() -> Parser<Expr> {
    padded(&double_number()).map(Expr::Value)
}

/// `( <operator> <expr> <expr> )`. Both operands recurse through lazy
/// thunks; `build` wraps them into the matching tree node.
fn binary_expr(operator: char, build: fn(Rc<Expr>, Rc<Expr>) -> Expr) -> Parser<Expr> {
    let open = padded(&expect_char('('));
    let close = padded(&expect_char(')'));
    let op = padded(&expect_char(operator));
    let operands = Parser::lazy(expr)
        .and(expr)
        .map(move |pair| build(Rc::new(pair.first), Rc::new(pair.second)));
    open.then(&op).then(&operands).skip(&close)
}

pub fn add_expr() -> Parser<Expr> {
    binary_expr('+', Expr::Add)
}

pub fn sub_expr() -> Parser<Expr> {
    binary_expr('-', Expr::Sub)
}

pub fn mul_expr() -> Parser<Expr> {
    binary_expr('*', Expr::Mul)
}

pub fn div_expr() -> Parser<Expr> {
    binary_expr('/', Expr::Div)
}

/// Any expression, by ordered choice over the leaf and operator forms.
pub fn expr() -> Parser<Expr> {
    padded(
        &value_expr()
            .or(add_expr)
            .or(sub_expr)
            .or(mul_expr)
            .or(div_expr),
    )
}
