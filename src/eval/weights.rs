//! Heuristic weights for Kalah evaluation
//!
//! Scores are `f64` because several weights are fractional. The terminal
//! sentinel is far outside the range any weighted sum can reach (a full
//! standard game holds 48 stones, bounding the balanced formula well
//! under 1000), so a certain win always dominates heuristic play.

/// Evaluation weights
pub struct Weight;

impl Weight {
    /// Terminal sentinel: certain win (+) or loss (-); draws score 0
    pub const WIN: f64 = 10_000.0;

    // Balanced heuristic: steady accumulation, defensive play
    /// Store-difference weight, the dominant term
    pub const STORE_DIFF: f64 = 10.0;
    /// Own-side stone advantage (potential future captures)
    pub const SIDE_STONES: f64 = 0.5;

    // Aggressive heuristic: prioritizes captures and extra turns
    /// Store difference, weighted higher than balanced
    pub const STORE_DIFF_AGGRESSIVE: f64 = 15.0;
    /// Per stone sitting opposite one of the mover's empty pits
    pub const CAPTURE_POTENTIAL: f64 = 3.0;
    /// Per pit whose count lands the last stone exactly in the store
    pub const EXTRA_TURN_POTENTIAL: f64 = 4.0;
    /// Base value of each extra-turn opportunity before weighting
    pub const EXTRA_TURN_UNIT: f64 = 2.0;
    /// Penalty per stone on the opponent's side
    pub const OPPONENT_STONES: f64 = 0.8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_dominates_heuristic_range() {
        // Largest balanced score with every stone on one side of a
        // standard 48-stone game
        let max_balanced = 48.0 * Weight::STORE_DIFF + 48.0 * Weight::SIDE_STONES;
        assert!(max_balanced < Weight::WIN);

        let max_aggressive = 48.0 * Weight::STORE_DIFF_AGGRESSIVE
            + 48.0 * Weight::CAPTURE_POTENTIAL
            + 6.0 * Weight::EXTRA_TURN_UNIT * Weight::EXTRA_TURN_POTENTIAL;
        assert!(max_aggressive < Weight::WIN);
    }
}
