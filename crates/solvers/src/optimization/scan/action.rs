/// Actions an observer can take during an exhaustive scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the scan and return the best candidate found so far.
    ///
    /// A candidate that evaluated successfully is still considered for the
    /// best before the scan stops.
    StopEarly,

    /// Leave this candidate out of best tracking and move on.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors at candidates known to be
    ///   irrelevant, so the rest of the domain is still scanned.
    /// - Masking part of the domain even when evaluation succeeded.
    Skip,
}
