use clap::ValueEnum;

/// Built-in objectives available from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Function {
    /// -x² + 4x, peaking at x = 2.
    Parabola,

    /// x³ - 4x.
    Cubic,

    /// sin x.
    Sine,

    /// |x - 1|.
    Abs,
}

impl Function {
    /// Evaluates the function at `x`.
    #[must_use]
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Self::Parabola => -x.powi(2) + 4.0 * x,
            Self::Cubic => x.powi(3) - 4.0 * x,
            Self::Sine => x.sin(),
            Self::Abs => (x - 1.0).abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn evaluates_each_function() {
        assert_relative_eq!(Function::Parabola.eval(2.0), 4.0);
        assert_relative_eq!(Function::Cubic.eval(2.0), 0.0);
        assert_relative_eq!(Function::Sine.eval(std::f64::consts::FRAC_PI_2), 1.0);
        assert_relative_eq!(Function::Abs.eval(-1.0), 2.0);
    }
}
