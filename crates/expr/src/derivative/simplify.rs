use crate::{BinaryOp, Expr, Func};

/// Simplifies bottom-up: children first, then local rewrites at each node.
pub(super) fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Variable(_) | Expr::Constant(_) => expr,
        Expr::Neg(inner) => neg(simplify(*inner)),
        Expr::Binary { op, lhs, rhs } => {
            let (l, r) = (simplify(*lhs), simplify(*rhs));
            match op {
                BinaryOp::Add => add(l, r),
                BinaryOp::Sub => sub(l, r),
                BinaryOp::Mul => mul(l, r),
                BinaryOp::Div => div(l, r),
                BinaryOp::Pow => pow(l, r),
            }
        }
        Expr::Call { func, arg } => call(func, simplify(*arg)),
    }
}

fn number(value: f64) -> Expr {
    // Avoid printing "-0".
    Expr::Number(if value == 0.0 { 0.0 } else { value })
}

/// Folds two numbers when the result stays finite.
///
/// Division only folds when the quotient is a whole number, so `1 / 3` stays
/// symbolic.
fn fold(op: BinaryOp, l: &Expr, r: &Expr) -> Option<Expr> {
    let (Expr::Number(a), Expr::Number(b)) = (l, r) else {
        return None;
    };
    let value = op.apply(*a, *b).ok()?;
    let exact = op != BinaryOp::Div || value.fract() == 0.0;
    (value.is_finite() && exact).then(|| number(value))
}

fn neg(inner: Expr) -> Expr {
    match inner {
        Expr::Number(n) => number(-n),
        Expr::Neg(inner) => *inner,
        inner => Expr::neg(inner),
    }
}

fn add(l: Expr, r: Expr) -> Expr {
    if let Some(folded) = fold(BinaryOp::Add, &l, &r) {
        return folded;
    }
    if l.is_number(0.0) {
        return r;
    }
    if r.is_number(0.0) {
        return l;
    }
    match r {
        Expr::Neg(inner) => sub(l, *inner),
        Expr::Number(n) if n < 0.0 => sub(l, number(-n)),
        r => Expr::binary(BinaryOp::Add, l, r),
    }
}

fn sub(l: Expr, r: Expr) -> Expr {
    if let Some(folded) = fold(BinaryOp::Sub, &l, &r) {
        return folded;
    }
    if r.is_number(0.0) {
        return l;
    }
    if l.is_number(0.0) {
        return neg(r);
    }
    if l == r {
        return number(0.0);
    }
    match r {
        Expr::Neg(inner) => add(l, *inner),
        Expr::Number(n) if n < 0.0 => add(l, number(-n)),
        r => Expr::binary(BinaryOp::Sub, l, r),
    }
}

fn mul(l: Expr, r: Expr) -> Expr {
    if let Some(folded) = fold(BinaryOp::Mul, &l, &r) {
        return folded;
    }
    if l.is_number(0.0) || r.is_number(0.0) {
        return number(0.0);
    }
    if l.is_number(1.0) {
        return r;
    }
    if r.is_number(1.0) {
        return l;
    }
    if l.is_number(-1.0) {
        return neg(r);
    }

    match (l, r) {
        // Coefficients go first.
        (l, Expr::Number(n)) if !matches!(l, Expr::Number(_)) => mul(Expr::Number(n), l),
        (Expr::Neg(u), r) => neg(mul(*u, r)),
        (Expr::Number(a), Expr::Neg(v)) => mul(number(-a), *v),
        (l, Expr::Neg(v)) => neg(mul(l, *v)),
        (
            Expr::Number(a),
            Expr::Binary {
                op: op @ (BinaryOp::Mul | BinaryOp::Div),
                lhs,
                rhs,
            },
        ) => match *lhs {
            Expr::Number(b) if op == BinaryOp::Mul => mul(number(a * b), *rhs),
            Expr::Number(b) => div(number(a * b), *rhs),
            lhs => Expr::binary(BinaryOp::Mul, Expr::Number(a), Expr::binary(op, lhs, *rhs)),
        },
        (l, r) => Expr::binary(BinaryOp::Mul, l, r),
    }
}

fn div(l: Expr, r: Expr) -> Expr {
    if let Some(folded) = fold(BinaryOp::Div, &l, &r) {
        return folded;
    }
    if l.is_number(0.0) && !r.is_number(0.0) {
        return number(0.0);
    }
    if r.is_number(1.0) {
        return l;
    }
    match l {
        Expr::Neg(inner) => neg(div(*inner, r)),
        l => Expr::binary(BinaryOp::Div, l, r),
    }
}

fn pow(l: Expr, r: Expr) -> Expr {
    if let Some(folded) = fold(BinaryOp::Pow, &l, &r) {
        return folded;
    }
    if r.is_number(0.0) || l.is_number(1.0) {
        return number(1.0);
    }
    if r.is_number(1.0) {
        return l;
    }
    Expr::binary(BinaryOp::Pow, l, r)
}

/// Folds calls on numbers only when the result is a whole number, e.g. `cos(0)`.
fn call(func: Func, arg: Expr) -> Expr {
    if let Expr::Number(n) = arg {
        match func.apply(n) {
            Ok(value) if value.is_finite() && value.fract() == 0.0 => return number(value),
            _ => {}
        }
    }
    Expr::call(func, arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::parse;

    fn simplified(source: &str) -> String {
        simplify(parse(source).expect("should parse")).to_string()
    }

    #[test]
    fn folds_constants() {
        assert_eq!(simplified("2 + 3 * 4"), "14");
        assert_eq!(simplified("6 / 3"), "2");
        assert_eq!(simplified("1 / 3"), "1 / 3");
        assert_eq!(simplified("cos(0) * x"), "x");
    }

    #[test]
    fn removes_identities() {
        assert_eq!(simplified("0 + x"), "x");
        assert_eq!(simplified("x * 1"), "x");
        assert_eq!(simplified("0 * sin(x)"), "0");
        assert_eq!(simplified("x ^ 1"), "x");
        assert_eq!(simplified("x ^ 0"), "1");
        assert_eq!(simplified("x - x"), "0");
    }

    #[test]
    fn normalizes_signs_and_coefficients() {
        assert_eq!(simplified("--x"), "x");
        assert_eq!(simplified("x * 3"), "3 * x");
        assert_eq!(simplified("x + -2"), "x - 2");
        assert_eq!(simplified("2 * (3 * x)"), "6 * x");
        assert_eq!(simplified("8 * -(e^x)"), "-8 * e ^ x");
        assert_eq!(simplified("7 * (1 / x)"), "7 / x");
    }
}
