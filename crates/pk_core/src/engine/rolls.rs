//! Random roll sources
//!
//! Keeper policy and outcome resolver never touch an RNG directly: every draw is a
//! `[0, 1)` roll pulled from a [`RollSource`]. Sessions use a seeded ChaCha stream, tests
//! use [`ScriptedRolls`] to force exact outcomes.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of uniform rolls in `[0, 1)`.
pub trait RollSource {
    fn next_roll(&mut self) -> f32;
}

impl RollSource for ChaCha8Rng {
    fn next_roll(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn next_roll(&mut self) -> f32 {
        (**self).next_roll()
    }
}

/// Seeded deterministic stream (same seed = same session).
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fixed sequence of rolls, consumed front to back.
///
/// Once exhausted every further roll is `fallback` (0.5 unless set).
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    rolls: VecDeque<f32>,
    fallback: f32,
    consumed: usize,
}

impl ScriptedRolls {
    pub fn new(rolls: impl IntoIterator<Item = f32>) -> Self {
        Self { rolls: rolls.into_iter().collect(), fallback: 0.5, consumed: 0 }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_fallback(mut self, fallback: f32) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn push(&mut self, roll: f32) {
        self.rolls.push_back(roll);
    }

    /// Number of rolls drawn so far, scripted or fallback.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RollSource for ScriptedRolls {
    fn next_roll(&mut self) -> f32 {
        self.consumed += 1;
        self.rolls.pop_front().unwrap_or(self.fallback)
    }
}

/// Uniform index in `0..len` from a single roll.
pub fn pick_index(roll: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    ((roll.clamp(0.0, 1.0) * len as f32) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rolls_deterministic() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..32 {
            let ra = a.next_roll();
            assert_eq!(ra, b.next_roll());
            assert!((0.0..1.0).contains(&ra));
        }
    }

    #[test]
    fn test_scripted_rolls_then_fallback() {
        let mut rolls = ScriptedRolls::new([0.1, 0.9]).with_fallback(0.25);
        assert_eq!(rolls.next_roll(), 0.1);
        assert_eq!(rolls.next_roll(), 0.9);
        assert_eq!(rolls.next_roll(), 0.25);
        assert_eq!(rolls.consumed(), 3);
        assert_eq!(rolls.remaining(), 0);
    }

    #[test]
    fn test_pick_index_bounds() {
        assert_eq!(pick_index(0.0, 3), 0);
        assert_eq!(pick_index(0.34, 3), 1);
        assert_eq!(pick_index(0.999, 3), 2);
        assert_eq!(pick_index(1.0, 3), 2);
        assert_eq!(pick_index(0.5, 0), 0);
    }
}
