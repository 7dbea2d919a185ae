use crate::optimization::Point;

/// Event emitted by the refiner after each completed round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Round number, starting at 1.
    pub round: usize,

    /// Interval scanned this round.
    pub interval: [f64; 2],

    /// Grid spacing used this round.
    pub step: f64,

    /// Number of candidates on this round's grid.
    pub candidates: usize,

    /// Best point found this round.
    pub point: Point,
}

/// Control actions supported by the refiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after this round and return its best point.
    StopEarly,
}
