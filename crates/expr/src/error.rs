use thiserror::Error;

/// Errors produced while turning text into an [`Expr`](crate::Expr).
///
/// Positions are zero-based character offsets into the source text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("expected {expected} at position {position}")]
    UnexpectedToken {
        expected: &'static str,
        position: usize,
    },

    #[error("expected {expected} but the expression ended")]
    UnexpectedEnd { expected: &'static str },

    #[error("unknown function '{name}' at position {position}")]
    UnknownFunction { name: String, position: usize },

    #[error("function '{name}' does not accept {found} argument(s)")]
    Arity { name: &'static str, found: usize },

    #[error("expression nests too deeply at position {position}")]
    TooDeep { position: usize },
}

/// Errors produced while evaluating a parsed expression.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{func}({arg}) is outside the domain")]
    Domain { func: &'static str, arg: f64 },
}

/// Either kind of failure, for one-shot parse-and-evaluate calls.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
