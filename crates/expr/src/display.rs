use std::fmt;

use crate::{BinaryOp, Expr};

/// Binding strength, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Sum,
    Product,
    Prefix,
    Power,
    Atom,
}

impl BinaryOp {
    fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Sum,
            Self::Mul | Self::Div => Precedence::Product,
            Self::Pow => Precedence::Power,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl Expr {
    fn precedence(&self) -> Precedence {
        match self {
            Self::Number(n) if *n < 0.0 => Precedence::Prefix,
            Self::Neg(_) => Precedence::Prefix,
            Self::Binary { op, .. } => op.precedence(),
            _ => Precedence::Atom,
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Expr, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

/// Prints with the fewest parentheses that keep the meaning, e.g. `2 * x ^ 2`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Variable(name) => f.write_str(name),
            Self::Constant(constant) => f.write_str(constant.name()),
            Self::Neg(inner) => {
                f.write_str("-")?;
                write_operand(f, inner, inner.precedence() < Precedence::Power)
            }
            Self::Binary { op, lhs, rhs } => {
                let prec = op.precedence();

                // `^` groups to the right; the others group to the left.
                let (left_parens, right_parens) = if *op == BinaryOp::Pow {
                    (lhs.precedence() <= prec, rhs.precedence() < prec)
                } else {
                    let non_associative = matches!(op, BinaryOp::Sub | BinaryOp::Div);
                    (
                        lhs.precedence() < prec,
                        rhs.precedence() < prec || (non_associative && rhs.precedence() == prec),
                    )
                };

                write_operand(f, lhs, left_parens)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, rhs, right_parens)
            }
            Self::Call { func, arg } => write!(f, "{}({arg})", func.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;

    fn display(source: &str) -> String {
        parse(source).expect("should parse").to_string()
    }

    #[test]
    fn spaces_binary_operators() {
        assert_eq!(display("x^2-4"), "x ^ 2 - 4");
        assert_eq!(display("2x"), "2 * x");
    }

    #[test]
    fn keeps_only_needed_parentheses() {
        assert_eq!(display("(x + 1) * (x - 1)"), "(x + 1) * (x - 1)");
        assert_eq!(display("(x * 2) + 1"), "x * 2 + 1");
        assert_eq!(display("x - (y - z)"), "x - (y - z)");
        assert_eq!(display("x / (2 * y)"), "x / (2 * y)");
        assert_eq!(display("(x ^ 2) ^ 3"), "(x ^ 2) ^ 3");
        assert_eq!(display("x ^ 2 ^ 3"), "x ^ 2 ^ 3");
        assert_eq!(display("-(x + 1)"), "-(x + 1)");
        assert_eq!(display("(-x) ^ 2"), "(-x) ^ 2");
        assert_eq!(display("-x ^ 2"), "-x ^ 2");
        assert_eq!(display("e^(1-x)"), "e ^ (1 - x)");
    }

    #[test]
    fn printed_form_parses_back_to_the_same_value() {
        for source in ["8*e^(1-x) + 7*log(x)", "-x^2 + 3(x-1)/2", "2^-x", "log(x, 2)"] {
            let original = parse(source).unwrap();
            let reparsed = parse(&original.to_string()).unwrap();
            assert_eq!(original.eval("x", 1.7), reparsed.eval("x", 1.7), "{source}");
        }
    }
}
