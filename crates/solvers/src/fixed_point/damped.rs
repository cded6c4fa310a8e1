use iterlab_core::Function;

/// The damped fixed-point map `g(x) = x - λ·f(x)`.
#[derive(Debug, Clone, Copy)]
pub struct Damped<F> {
    f: F,
    damping: f64,
}

impl<F: Function> Damped<F> {
    /// Wraps `f` with damping `λ`.
    pub fn new(f: F, damping: f64) -> Self {
        Self { f, damping }
    }
}

impl<F: Function> Function for Damped<F> {
    type Error = F::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        let fx = self.f.call(x)?;
        Ok(x - self.damping * fx)
    }

    fn describe(&self) -> String {
        format!("x - {}*({})", self.damping, self.f.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use iterlab_core::from_fn;

    #[test]
    fn applies_damping() {
        let g = Damped::new(from_fn(|x| x * x - 4.0), 0.1);
        assert_relative_eq!(g.call(2.5).unwrap(), 2.5 - 0.1 * 2.25);
        assert_relative_eq!(g.call(2.0).unwrap(), 2.0);
    }

    #[test]
    fn describes_synthesized_map() {
        let g = Damped::new(from_fn(|x| x), 0.1);
        assert_eq!(g.describe(), "x - 0.1*(f(x))");
    }
}
