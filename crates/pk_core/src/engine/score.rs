//! Scoreboard state

use serde::{Deserialize, Serialize};

use super::resolver::Outcome;

/// 스코어 상태
///
/// `score` is +1 per goal and −1 per save or miss, so it may go negative.
/// After every resolution `shots == goals + saves + misses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: i32,
    pub goals: u32,
    pub saves: u32,
    pub misses: u32,
    pub shots: u32,
    /// Subset of `goals` that broke through an exact-match save.
    pub power_goals: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one resolved shot.
    pub fn apply(&mut self, outcome: Outcome) {
        self.shots += 1;
        match outcome {
            Outcome::Goal => {
                self.goals += 1;
                self.score += 1;
            }
            Outcome::PowerGoal => {
                self.goals += 1;
                self.power_goals += 1;
                self.score += 1;
            }
            Outcome::Saved => {
                self.saves += 1;
                self.score -= 1;
            }
            // Pure penalty: no save credit for the keeper.
            Outcome::Miss => {
                self.misses += 1;
                self.score -= 1;
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Goals per shot, 0.0 before the first shot.
    pub fn conversion_rate(&self) -> f32 {
        if self.shots == 0 {
            0.0
        } else {
            self.goals as f32 / self.shots as f32
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.shots == self.goals + self.saves + self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_each_outcome() {
        let mut score = ScoreState::new();
        score.apply(Outcome::Goal);
        score.apply(Outcome::PowerGoal);
        score.apply(Outcome::Saved);
        score.apply(Outcome::Miss);

        assert_eq!(score.shots, 4);
        assert_eq!(score.goals, 2);
        assert_eq!(score.power_goals, 1);
        assert_eq!(score.saves, 1);
        assert_eq!(score.misses, 1);
        assert_eq!(score.score, 0);
        assert!(score.is_balanced());
    }

    #[test]
    fn test_score_goes_negative() {
        let mut score = ScoreState::new();
        for _ in 0..3 {
            score.apply(Outcome::Saved);
        }
        assert_eq!(score.score, -3);
        assert_eq!(score.conversion_rate(), 0.0);
    }

    #[test]
    fn test_miss_does_not_credit_save() {
        let mut score = ScoreState::new();
        score.apply(Outcome::Miss);
        assert_eq!(score.saves, 0);
        assert_eq!(score.score, -1);
        assert_eq!(score.shots, 1);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut score = ScoreState::new();
        score.apply(Outcome::Goal);
        score.reset();
        assert_eq!(score, ScoreState::default());
    }
}
