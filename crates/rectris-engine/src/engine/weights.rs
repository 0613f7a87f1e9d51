use serde::{Deserialize, Serialize};

/// Weights for the expert placement heuristic.
///
/// The six terms are combined by [`Player::play`](crate::Player) when ranking
/// candidate locations. They are configuration, not board state: a player is
/// built with [`ScoreWeights::TUNED`] and may be given a different set for
/// tuning or testing. Fields left out of a deserialized configuration file
/// fall back to the tuned defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Reward per edge cell resting against an already filled neighbour.
    pub adjacent: f64,
    /// Reward per edge cell resting against the board border.
    pub border: f64,
    /// Factor on the current counter of a row or column the placement would
    /// complete.
    pub complete: f64,
    /// Factor on the counters of lines adjacent to a completed one. Negative
    /// in the tuned set: clearing a line disturbs its near-complete
    /// neighbours.
    pub neighbor_complete: f64,
    /// Factor on the counter of a spanned line that stays incomplete.
    pub near_complete: f64,
    /// Penalty per corner that would seal off a diagonal pocket.
    pub diagonal: f64,
}

impl ScoreWeights {
    /// Weights found by empirical search, starting from the hand-picked set
    /// `[100, 98, 10000, -1000, 0.01, 6]`.
    pub const TUNED: Self = Self {
        adjacent: 101.736_239_195_349_31,
        border: 102.599_665_348_500_58,
        complete: 10_179.484_568_034_057,
        neighbor_complete: -965.599_471_966_593_9,
        near_complete: 0.009_403_568_796_147_519,
        diagonal: 5.690_955_955_544_556,
    };
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::TUNED
    }
}
