use std::convert::Infallible;

/// A single-variable function that solvers sample.
///
/// Functions must be deterministic, always producing the same result for a
/// given `x`, which is what makes solver traces reproducible.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type for parse or domain failures.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;

    /// Returns a human-readable form of the function.
    ///
    /// Solvers that synthesize a new function from this one (such as the
    /// fixed-point map `x - λ·f(x)`) use it to describe what they built.
    fn describe(&self) -> String {
        String::from("f(x)")
    }
}

impl<T: Function + ?Sized> Function for &T {
    type Error = T::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// A [`Function`] backed by an infallible closure.
///
/// Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps a closure `Fn(f64) -> f64` as a [`Function`].
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(f64) -> f64,
{
    FromFn(f)
}

impl<F> Function for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}
