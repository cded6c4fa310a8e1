use std::f64::consts;

/// An expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Constant(Constant),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        func: Func,
        arg: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Named mathematical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    E,
    Pi,
}

/// Built-in single-argument functions.
///
/// `Log` and `Ln` are both the natural logarithm. The two-argument form
/// `log(x, b)` is parsed into `ln(x) / ln(b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Log,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
}

impl Expr {
    pub(crate) fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub(crate) fn call(func: Func, arg: Expr) -> Self {
        Self::Call {
            func,
            arg: Box::new(arg),
        }
    }

    pub(crate) fn neg(inner: Expr) -> Self {
        Self::Neg(Box::new(inner))
    }

    /// Returns true if `var` appears anywhere in the tree.
    #[must_use]
    pub fn depends_on(&self, var: &str) -> bool {
        match self {
            Self::Number(_) | Self::Constant(_) => false,
            Self::Variable(name) => name == var,
            Self::Neg(inner) => inner.depends_on(var),
            Self::Binary { lhs, rhs, .. } => lhs.depends_on(var) || rhs.depends_on(var),
            Self::Call { arg, .. } => arg.depends_on(var),
        }
    }

    pub(crate) fn is_number(&self, value: f64) -> bool {
        matches!(self, Self::Number(n) if *n == value)
    }
}

impl Constant {
    /// Looks up a constant by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "e" => Some(Self::E),
            "pi" => Some(Self::Pi),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::E => "e",
            Self::Pi => "pi",
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::E => consts::E,
            Self::Pi => consts::PI,
        }
    }
}

impl Func {
    /// Looks up a function by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "log" => Self::Log,
            "ln" => Self::Ln,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "abs" => Self::Abs,
            _ => return None,
        };
        Some(func)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Abs => "abs",
        }
    }
}
