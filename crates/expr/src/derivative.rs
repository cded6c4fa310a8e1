mod simplify;


use crate::{BinaryOp, Constant, Expr, Func};

use simplify::simplify;

impl Expr {
    /// Returns the simplified first derivative with respect to `var`.
    #[must_use]
    pub fn derivative(&self, var: &str) -> Expr {
        simplify(differentiate(self, var))
    }

    /// Applies constant folding and the identities for 0 and 1.
    #[must_use]
    pub fn simplified(self) -> Expr {
        simplify(self)
    }
}

fn num(value: f64) -> Expr {
    Expr::Number(value)
}

fn add(l: Expr, r: Expr) -> Expr {
    Expr::binary(BinaryOp::Add, l, r)
}

fn sub(l: Expr, r: Expr) -> Expr {
    Expr::binary(BinaryOp::Sub, l, r)
}

fn mul(l: Expr, r: Expr) -> Expr {
    Expr::binary(BinaryOp::Mul, l, r)
}

fn div(l: Expr, r: Expr) -> Expr {
    Expr::binary(BinaryOp::Div, l, r)
}

fn pow(l: Expr, r: Expr) -> Expr {
    Expr::binary(BinaryOp::Pow, l, r)
}

fn call(func: Func, arg: Expr) -> Expr {
    Expr::call(func, arg)
}

/// Unsimplified derivative of `expr` with respect to `var`.
fn differentiate(expr: &Expr, var: &str) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Constant(_) => num(0.0),
        Expr::Variable(name) => num(if name == var { 1.0 } else { 0.0 }),
        Expr::Neg(inner) => Expr::neg(differentiate(inner, var)),
        Expr::Binary { op, lhs, rhs } => {
            let (u, v) = (lhs.as_ref(), rhs.as_ref());
            let du = differentiate(u, var);
            let dv = differentiate(v, var);
            match op {
                BinaryOp::Add => add(du, dv),
                BinaryOp::Sub => sub(du, dv),
                BinaryOp::Mul => add(mul(du, v.clone()), mul(u.clone(), dv)),
                BinaryOp::Div => div(
                    sub(mul(du, v.clone()), mul(u.clone(), dv)),
                    pow(v.clone(), num(2.0)),
                ),
                BinaryOp::Pow => power_rule(u, v, du, dv, var),
            }
        }
        Expr::Call { func, arg } => {
            let u = arg.as_ref();
            mul(outer_derivative(*func, u), differentiate(u, var))
        }
    }
}

fn power_rule(u: &Expr, v: &Expr, du: Expr, dv: Expr, var: &str) -> Expr {
    if !v.depends_on(var) {
        // d(u^n) = n·u^(n-1)·u'
        return mul(mul(v.clone(), pow(u.clone(), sub(v.clone(), num(1.0)))), du);
    }

    if !u.depends_on(var) {
        // d(a^v) = a^v·ln(a)·v'
        let scaled = match u {
            Expr::Constant(Constant::E) => pow(u.clone(), v.clone()),
            _ => mul(pow(u.clone(), v.clone()), call(Func::Ln, u.clone())),
        };
        return mul(scaled, dv);
    }

    // d(u^v) = u^v·(v'·ln(u) + v·u'/u)
    mul(
        pow(u.clone(), v.clone()),
        add(
            mul(dv, call(Func::Ln, u.clone())),
            div(mul(v.clone(), du), u.clone()),
        ),
    )
}

/// Derivative of `func` evaluated at `u`, before the chain rule factor.
fn outer_derivative(func: Func, u: &Expr) -> Expr {
    let one_minus_square = sub(num(1.0), pow(u.clone(), num(2.0)));
    let u = u.clone();

    match func {
        Func::Sin => call(Func::Cos, u),
        Func::Cos => Expr::neg(call(Func::Sin, u)),
        Func::Tan => div(num(1.0), pow(call(Func::Cos, u), num(2.0))),
        Func::Asin => div(num(1.0), call(Func::Sqrt, one_minus_square)),
        Func::Acos => Expr::neg(div(num(1.0), call(Func::Sqrt, one_minus_square))),
        Func::Atan => div(num(1.0), add(num(1.0), pow(u, num(2.0)))),
        Func::Sinh => call(Func::Cosh, u),
        Func::Cosh => call(Func::Sinh, u),
        Func::Tanh => div(num(1.0), pow(call(Func::Cosh, u), num(2.0))),
        Func::Exp => call(Func::Exp, u),
        Func::Log | Func::Ln => div(num(1.0), u),
        Func::Log10 => div(num(1.0), mul(u, call(Func::Ln, num(10.0)))),
        Func::Log2 => div(num(1.0), mul(u, call(Func::Ln, num(2.0)))),
        Func::Sqrt => div(num(1.0), mul(num(2.0), call(Func::Sqrt, u))),
        Func::Cbrt => div(num(1.0), mul(num(3.0), pow(call(Func::Cbrt, u), num(2.0)))),
        Func::Abs => div(u.clone(), call(Func::Abs, u)),
    }
}
