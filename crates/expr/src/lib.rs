//! Single-variable expressions for iterlab.
//!
//! Parses text such as `8*e^(1-x) + 7*log(x)` into an [`Expr`] tree, evaluates
//! it at a point, and differentiates it symbolically. [`Expression`] pairs the
//! source text with its tree and implements [`iterlab_core::Function`], so a
//! parsed expression can be handed straight to any solver.
//!
//! # Grammar
//!
//! ```text
//! expression := term (("+" | "-") term)*
//! term       := unary (("*" | "/") unary | <implicit after a number> unary)*
//! unary      := ("-" | "+") unary | power
//! power      := primary ("^" unary)?
//! primary    := number | constant | variable | call | "(" expression ")"
//! call       := name "(" expression ("," expression)? ")"
//! ```
//!
//! `^` is right-associative and binds tighter than unary minus, so `-x^2` is
//! `-(x^2)`. A number followed by a name or `(` multiplies implicitly, as in
//! `2x` or `3(x+1)`. `log` is the natural logarithm and `log(x, b)` takes an
//! explicit base.

mod ast;
mod derivative;
mod display;
mod error;
mod eval;
mod expression;
mod parser;

pub use ast::{BinaryOp, Constant, Expr, Func};
pub use error::{Error, EvalError, ParseError};
pub use expression::{Expression, INVALID_FUNCTION, VARIABLE, differentiate, evaluate};
pub use parser::{MAX_DEPTH, parse};
