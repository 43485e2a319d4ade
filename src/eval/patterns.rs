//! Pattern scores for the move heuristic
//!
//! A candidate placement is scored per axis by the length of the run it
//! would sit in and by how many of the run's two ends are blocked. These
//! constants are the fixed score table for those patterns.

/// Pattern scores keyed by run length and blocked ends
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row: a winning placement, regardless of blocks
    pub const FIVE: i32 = 100_000;
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 10_000;
    /// Closed four: XOOOO_ (one end still playable)
    pub const CLOSED_FOUR: i32 = 1_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: XOOO_
    pub const CLOSED_THREE: i32 = 100;
    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Closed two: XOO_
    pub const CLOSED_TWO: i32 = 10;
    /// Lone stone with both ends open
    pub const OPEN_ONE: i32 = 10;
}

/// Map one axis's run to its score.
///
/// `count` includes the reference cell itself; `blocked` is how many of the
/// two directed walks ended on the board edge or an opposing stone (0..=2).
/// Combinations not in the table score zero, in particular any run of four
/// or less with both ends blocked, which can never grow to five.
#[inline]
#[must_use]
pub fn line_score(count: u32, blocked: u8) -> i32 {
    if count >= 5 {
        return PatternScore::FIVE;
    }
    match (count, blocked) {
        (4, 0) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 0) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 0) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 0) => PatternScore::OPEN_ONE,
        _ => 0,
    }
}
