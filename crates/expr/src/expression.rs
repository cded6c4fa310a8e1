use std::{fmt, str::FromStr};

use iterlab_core::Function;

use crate::{Error, EvalError, Expr, ParseError, parse};

/// The variable that expressions are functions of.
pub const VARIABLE: &str = "x";

/// Placeholder returned by [`differentiate`] for text that does not parse.
pub const INVALID_FUNCTION: &str = "Invalid function";

/// A parsed single-variable function of `x`, keeping its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    ast: Expr,
}

impl Expression {
    /// Parses `source` as a function of `x`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not a valid expression.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let ast = parse(source)?;
        Ok(Self {
            source: source.trim().to_owned(),
            ast,
        })
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] for unknown variables, division by zero, or
    /// domain violations.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.ast.eval(VARIABLE, x)
    }

    /// Returns the simplified derivative with respect to `x`.
    #[must_use]
    pub fn derivative(&self) -> Expr {
        self.ast.derivative(VARIABLE)
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn ast(&self) -> &Expr {
        &self.ast
    }
}

impl Function for Expression {
    type Error = EvalError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval(x)
    }

    fn describe(&self) -> String {
        self.source.clone()
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parses and evaluates `text` at `x` in one step.
///
/// # Errors
///
/// Returns an error if the text does not parse or cannot be evaluated at `x`.
pub fn evaluate(text: &str, x: f64) -> Result<f64, Error> {
    Ok(parse(text)?.eval(VARIABLE, x)?)
}

/// Returns the printed derivative of `text` with respect to `var`.
///
/// Never fails: text that does not parse yields [`INVALID_FUNCTION`].
#[must_use]
pub fn differentiate(text: &str, var: &str) -> String {
    match parse(text) {
        Ok(expr) => expr.derivative(var).to_string(),
        Err(_) => INVALID_FUNCTION.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parses_and_evaluates() {
        let f: Expression = "x^2 - 4".parse().unwrap();
        assert_relative_eq!(f.eval(2.5).unwrap(), 2.25);
        assert_eq!(f.to_string(), "x^2 - 4");
        assert_eq!(f.derivative().to_string(), "2 * x");
    }

    #[test]
    fn describes_itself_by_source() {
        let f = Expression::parse("  sin(x)  ").unwrap();
        assert_eq!(f.describe(), "sin(x)");
        assert_relative_eq!(f.call(0.0).unwrap(), 0.0);
    }

    #[test]
    fn one_shot_evaluate() {
        assert_relative_eq!(evaluate("2x + 1", 3.0).unwrap(), 7.0);
        assert!(matches!(evaluate("2 +", 1.0), Err(Error::Parse(_))));
        assert!(matches!(evaluate("1/x", 0.0), Err(Error::Eval(EvalError::DivisionByZero))));
    }

    #[test]
    fn differentiate_never_fails() {
        assert_eq!(differentiate("x^2 - 4", "x"), "2 * x");
        assert_eq!(differentiate("x^2 +", "x"), INVALID_FUNCTION);
        assert_eq!(differentiate("", "x"), INVALID_FUNCTION);
    }
}
