use crate::{BinaryOp, EvalError, Expr, Func};

impl Expr {
    /// Evaluates the tree with `var` bound to `x`.
    ///
    /// # Errors
    ///
    /// Returns an error for any other variable, a zero divisor, or a function
    /// argument outside its real domain.
    pub fn eval(&self, var: &str, x: f64) -> Result<f64, EvalError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Constant(constant) => Ok(constant.value()),
            Self::Variable(name) if name == var => Ok(x),
            Self::Variable(name) => Err(EvalError::UnknownVariable { name: name.clone() }),
            Self::Neg(inner) => Ok(-inner.eval(var, x)?),
            Self::Binary { op, lhs, rhs } => {
                let l = lhs.eval(var, x)?;
                let r = rhs.eval(var, x)?;
                op.apply(l, r)
            }
            Self::Call { func, arg } => func.apply(arg.eval(var, x)?),
        }
    }
}

impl BinaryOp {
    pub(crate) fn apply(self, l: f64, r: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(l + r),
            Self::Sub => Ok(l - r),
            Self::Mul => Ok(l * r),
            Self::Div if r == 0.0 => Err(EvalError::DivisionByZero),
            Self::Div => Ok(l / r),
            Self::Pow => {
                let value = l.powf(r);
                if value.is_nan() && !l.is_nan() && !r.is_nan() {
                    return Err(EvalError::Domain { func: "pow", arg: l });
                }
                Ok(value)
            }
        }
    }
}

impl Func {
    /// Applies the function to a real argument.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Domain`] when the argument is outside the real
    /// domain: non-positive logarithms, negative square roots, and inverse
    /// sine or cosine outside `[-1, 1]`.
    pub fn apply(self, arg: f64) -> Result<f64, EvalError> {
        let in_domain = match self {
            Self::Log | Self::Ln | Self::Log10 | Self::Log2 => arg > 0.0,
            Self::Sqrt => arg >= 0.0,
            Self::Asin | Self::Acos => (-1.0..=1.0).contains(&arg),
            _ => true,
        };
        if !in_domain {
            return Err(EvalError::Domain {
                func: self.name(),
                arg,
            });
        }

        Ok(match self {
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
            Self::Tan => arg.tan(),
            Self::Asin => arg.asin(),
            Self::Acos => arg.acos(),
            Self::Atan => arg.atan(),
            Self::Sinh => arg.sinh(),
            Self::Cosh => arg.cosh(),
            Self::Tanh => arg.tanh(),
            Self::Exp => arg.exp(),
            Self::Log | Self::Ln => arg.ln(),
            Self::Log10 => arg.log10(),
            Self::Log2 => arg.log2(),
            Self::Sqrt => arg.sqrt(),
            Self::Cbrt => arg.cbrt(),
            Self::Abs => arg.abs(),
        })
    }
}
