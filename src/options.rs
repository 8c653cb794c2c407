//! Opponent tuning options.

/// Heuristic weights used by [`HeuristicOpponent`](crate::HeuristicOpponent).
///
/// Use the builder methods to adjust individual weights:
///
/// ```
/// use cribrs::OpponentOptions;
///
/// let options = OpponentOptions::default()
///     .with_thirty_one_bonus(12.0)
///     .with_endgame_threshold(2);
/// assert_eq!(options.endgame_threshold, 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OpponentOptions {
    /// Bonus for a pegging play that reaches exactly 31.
    pub thirty_one_bonus: f64,
    /// Bonus for a pegging play that reaches exactly 15.
    pub fifteen_bonus: f64,
    /// Bonus for completing a pair (or more) while pegging.
    pub pair_bonus: f64,
    /// Bonus for completing a run while pegging.
    pub run_bonus: f64,
    /// Bonus for leaving the count between 26 and 30.
    pub high_count_bonus: f64,
    /// Penalty for playing a five onto a low count.
    pub low_five_penalty: f64,
    /// Counts at or below this are low for the five penalty.
    pub low_count_limit: u32,
    /// Endgame weighting applies when the opponent holds at most this many cards.
    pub endgame_threshold: usize,
    /// Multiplier on immediate pegging points in the endgame.
    pub endgame_multiplier: f64,
    /// Crib value of a discarded pair.
    pub crib_pair: f64,
    /// Crib value of each discarded five.
    pub crib_five: f64,
    /// Crib value of two discards summing to 15.
    pub crib_fifteen: f64,
    /// Crib value of two discards with adjacent ranks.
    pub crib_adjacent: f64,
    /// Crib value of two discards one rank apart.
    pub crib_gap: f64,
    /// Crib value of two discards of the same suit.
    pub crib_suited: f64,
    /// Kept-hand value of each pair of adjacent ranks outside a run.
    pub hand_adjacent: f64,
    /// Kept-hand value per card of the most common suit beyond two.
    pub hand_suit_concentration: f64,
    /// Kept-hand value of each five, which pairs well with any ten-card starter.
    pub hand_five: f64,
}

impl Default for OpponentOptions {
    fn default() -> Self {
        Self {
            thirty_one_bonus: 8.0,
            fifteen_bonus: 4.0,
            pair_bonus: 2.0,
            run_bonus: 3.0,
            high_count_bonus: 1.5,
            low_five_penalty: 3.0,
            low_count_limit: 5,
            endgame_threshold: 1,
            endgame_multiplier: 1.5,
            crib_pair: 2.0,
            crib_five: 1.5,
            crib_fifteen: 2.0,
            crib_adjacent: 1.0,
            crib_gap: 0.5,
            crib_suited: 0.5,
            hand_adjacent: 0.5,
            hand_suit_concentration: 0.5,
            hand_five: 0.75,
        }
    }
}

impl OpponentOptions {
    /// Sets the bonus for reaching 31.
    #[must_use]
    pub const fn with_thirty_one_bonus(mut self, bonus: f64) -> Self {
        self.thirty_one_bonus = bonus;
        self
    }

    /// Sets the bonus for reaching 15.
    #[must_use]
    pub const fn with_fifteen_bonus(mut self, bonus: f64) -> Self {
        self.fifteen_bonus = bonus;
        self
    }

    /// Sets the bonus for completing a pair.
    #[must_use]
    pub const fn with_pair_bonus(mut self, bonus: f64) -> Self {
        self.pair_bonus = bonus;
        self
    }

    /// Sets the bonus for completing a run.
    #[must_use]
    pub const fn with_run_bonus(mut self, bonus: f64) -> Self {
        self.run_bonus = bonus;
        self
    }

    /// Sets the bonus for leaving the count between 26 and 30.
    #[must_use]
    pub const fn with_high_count_bonus(mut self, bonus: f64) -> Self {
        self.high_count_bonus = bonus;
        self
    }

    /// Sets the penalty for a five played onto a low count.
    #[must_use]
    pub const fn with_low_five_penalty(mut self, penalty: f64) -> Self {
        self.low_five_penalty = penalty;
        self
    }

    /// Sets the highest count considered low.
    #[must_use]
    pub const fn with_low_count_limit(mut self, limit: u32) -> Self {
        self.low_count_limit = limit;
        self
    }

    /// Sets the opponent card count at which endgame weighting starts.
    #[must_use]
    pub const fn with_endgame_threshold(mut self, cards: usize) -> Self {
        self.endgame_threshold = cards;
        self
    }

    /// Sets the endgame multiplier on immediate points.
    #[must_use]
    pub const fn with_endgame_multiplier(mut self, multiplier: f64) -> Self {
        self.endgame_multiplier = multiplier;
        self
    }

    /// Sets the crib value of a discarded pair.
    #[must_use]
    pub const fn with_crib_pair(mut self, value: f64) -> Self {
        self.crib_pair = value;
        self
    }

    /// Sets the crib value of each discarded five.
    #[must_use]
    pub const fn with_crib_five(mut self, value: f64) -> Self {
        self.crib_five = value;
        self
    }

    /// Sets the crib value of discards summing to 15.
    #[must_use]
    pub const fn with_crib_fifteen(mut self, value: f64) -> Self {
        self.crib_fifteen = value;
        self
    }

    /// Sets the crib value of adjacent discards.
    #[must_use]
    pub const fn with_crib_adjacent(mut self, value: f64) -> Self {
        self.crib_adjacent = value;
        self
    }

    /// Sets the crib value of discards one rank apart.
    #[must_use]
    pub const fn with_crib_gap(mut self, value: f64) -> Self {
        self.crib_gap = value;
        self
    }

    /// Sets the crib value of suited discards.
    #[must_use]
    pub const fn with_crib_suited(mut self, value: f64) -> Self {
        self.crib_suited = value;
        self
    }

    /// Sets the kept-hand value of adjacent ranks.
    #[must_use]
    pub const fn with_hand_adjacent(mut self, value: f64) -> Self {
        self.hand_adjacent = value;
        self
    }

    /// Sets the kept-hand value of suit concentration.
    #[must_use]
    pub const fn with_hand_suit_concentration(mut self, value: f64) -> Self {
        self.hand_suit_concentration = value;
        self
    }

    /// Sets the kept-hand value of each five.
    #[must_use]
    pub const fn with_hand_five(mut self, value: f64) -> Self {
        self.hand_five = value;
        self
    }
}
