/// Relative tolerance for snapping `width / step` to a whole number of steps.
const SNAP_TOL: f64 = 1e-9;

/// The candidates searched in one refinement round.
///
/// A grid over `[lower, upper]` with step `δ` holds `lower`, `lower + δ`,
/// `lower + 2δ`, … up to and including the first value that reaches `upper`.
/// Candidates are computed from their index, so rounding does not accumulate
/// across the grid.
///
/// When `(upper - lower) / δ` is within a relative `1e-9` of a whole number it
/// is snapped to that number. This keeps `upper` reachable when the division
/// lands just above a whole number, and keeps a spurious point past
/// `upper + δ` out when it lands just below one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    lower: f64,
    step: f64,
    len: usize,
}

impl Grid {
    /// Creates the grid for `interval` with spacing `step`.
    ///
    /// Expects finite bounds with `lower <= upper` and a finite positive
    /// step; the refiner validates both before building a grid.
    #[must_use]
    pub fn new(interval: [f64; 2], step: f64) -> Self {
        let [lower, upper] = interval;
        let steps = whole_steps(upper - lower, step);
        Self {
            lower,
            step,
            len: steps.saturating_add(1),
        }
    }

    /// Returns the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the grid has no candidates.
    ///
    /// A grid always holds at least its lower bound, so this is false for
    /// every grid built by [`Grid::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the candidate at `index`, if it is within the grid.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.len).then(|| self.at(index))
    }

    /// Returns the last candidate, the first one to reach the upper bound.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.len.checked_sub(1).map(|index| self.at(index))
    }

    /// Returns an iterator over the candidates in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter {
        Iter {
            grid: *self,
            front: 0,
            back: self.len,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn at(&self, index: usize) -> f64 {
        self.lower + index as f64 * self.step
    }
}

impl IntoIterator for Grid {
    type Item = f64;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &Grid {
    type Item = f64;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the candidates of a [`Grid`].
#[derive(Debug, Clone)]
pub struct Iter {
    grid: Grid,
    front: usize,
    back: usize,
}

impl Iterator for Iter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let x = self.grid.at(self.front);
        self.front += 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.grid.at(self.back))
    }
}

impl ExactSizeIterator for Iter {}

/// Number of whole steps needed for `lower + k * step` to reach `lower + width`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_steps(width: f64, step: f64) -> usize {
    let ratio = width / step;
    let nearest = ratio.round();
    let steps = if (ratio - nearest).abs() <= SNAP_TOL * nearest.max(1.0) {
        nearest
    } else {
        ratio.ceil()
    };
    // Saturating float-to-int cast; a negative width maps to zero steps.
    steps as usize
}
