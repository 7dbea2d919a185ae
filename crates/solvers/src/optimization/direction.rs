/// Which extreme of the objective a search is looking for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Search for the largest objective.
    #[default]
    Maximize,

    /// Search for the smallest objective.
    Minimize,
}

impl Direction {
    /// Returns `Maximize` when `maximize` is true, otherwise `Minimize`.
    #[must_use]
    pub fn from_maximize(maximize: bool) -> Self {
        if maximize {
            Self::Maximize
        } else {
            Self::Minimize
        }
    }

    /// The starting value of a running best: every real objective beats it.
    ///
    /// `-∞` when maximizing, `+∞` when minimizing.
    #[must_use]
    pub fn sentinel(self) -> f64 {
        match self {
            Self::Maximize => f64::NEG_INFINITY,
            Self::Minimize => f64::INFINITY,
        }
    }

    /// Returns true if `candidate` strictly improves on `best`.
    ///
    /// Ties never improve, so the first point to reach an extreme keeps it.
    /// Any comparison involving NaN is false.
    #[must_use]
    pub fn improves(self, candidate: f64, best: f64) -> bool {
        match self {
            Self::Maximize => candidate > best,
            Self::Minimize => candidate < best,
        }
    }
}
