//! Outcome resolver
//!
//! Pure decision logic: given the committed shot zone, the keeper reaction and an
//! optional power value, decide goal / save / miss. All randomness comes in through a
//! [`RollSource`], so a scripted roll sequence pins the outcome exactly.
//!
//! Rules, in order:
//! 1. Off frame (continuous aim outside `[0,1]²`) → `Miss`, no roll.
//! 2. Three-direction layout: same column → save with `direct_save_chance`, else goal.
//! 3. Exact zone match → `Saved`, unless power breaks through (`PowerGoal`).
//! 4. Same band, other column → save with `neighbor_save_chance`, else goal.
//! 5. Different band → `Goal`, no roll.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rolls::RollSource;
use super::zone::{GridLayout, Zone};
use crate::config::ResolutionConfig;

/// 슛 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Goal,
    Saved,
    /// Off target. Penalised like a save but never credited to the keeper.
    Miss,
    /// An exact-match save broken by a hard enough shot.
    PowerGoal,
}

impl Outcome {
    pub fn is_goal(self) -> bool {
        matches!(self, Outcome::Goal | Outcome::PowerGoal)
    }

    /// Score delta applied by the scoreboard.
    pub fn score_delta(self) -> i32 {
        if self.is_goal() {
            1
        } else {
            -1
        }
    }

    /// Status line shown after resolution.
    pub fn status_message(self) -> &'static str {
        match self {
            Outcome::Goal => "Goal! You beat the keeper.",
            Outcome::PowerGoal => "Power shot! It burst through the keeper.",
            Outcome::Saved => "Saved! The keeper read you.",
            Outcome::Miss => "Missed! The ball flew wide.",
        }
    }
}

/// Which rule decided the shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionRule {
    OffFrame,
    DirectionRead,
    DirectionBeaten,
    ExactMatch,
    Breakthrough,
    NeighborSave,
    NeighborBeaten,
    Unguarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub outcome: Outcome,
    pub rule: ResolutionRule,
    pub shot_zone: Option<Zone>,
    pub keeper_zone: Zone,
    pub power: Option<f32>,
}

pub struct OutcomeResolver<'a> {
    layout: GridLayout,
    config: &'a ResolutionConfig,
}

impl<'a> OutcomeResolver<'a> {
    pub fn new(layout: GridLayout, config: &'a ResolutionConfig) -> Self {
        Self { layout, config }
    }

    /// Resolve one shot. `power` is ignored unless the power mechanic is enabled.
    pub fn resolve(
        &self,
        shot_zone: Option<Zone>,
        keeper_zone: Zone,
        power: Option<f32>,
        rolls: &mut impl RollSource,
    ) -> Resolution {
        let power = power.filter(|_| self.config.power_enabled).map(|p| p.clamp(0.0, 1.0));
        let (outcome, rule) = match shot_zone {
            None => (Outcome::Miss, ResolutionRule::OffFrame),
            Some(zone) => self.decide(zone, keeper_zone, power, rolls),
        };

        debug!(
            shot = ?shot_zone.map(|z| z.key()),
            keeper = %keeper_zone.key(),
            ?power,
            ?outcome,
            ?rule,
            "shot resolved"
        );

        Resolution { outcome, rule, shot_zone, keeper_zone, power }
    }

    fn decide(
        &self,
        shot: Zone,
        keeper: Zone,
        power: Option<f32>,
        rolls: &mut impl RollSource,
    ) -> (Outcome, ResolutionRule) {
        if !self.layout.has_bands() {
            if shot.column != keeper.column {
                return (Outcome::Goal, ResolutionRule::DirectionBeaten);
            }
            if rolls.next_roll() >= self.config.direct_save_chance {
                return (Outcome::Goal, ResolutionRule::DirectionBeaten);
            }
            return self.try_breakthrough(power, rolls, ResolutionRule::DirectionRead);
        }

        let shot = self.layout.normalize(shot);
        let keeper = self.layout.normalize(keeper);

        if shot == keeper {
            return self.try_breakthrough(power, rolls, ResolutionRule::ExactMatch);
        }
        if shot.same_band(&keeper) {
            if rolls.next_roll() < self.config.neighbor_save_chance {
                return (Outcome::Saved, ResolutionRule::NeighborSave);
            }
            return (Outcome::Goal, ResolutionRule::NeighborBeaten);
        }
        (Outcome::Goal, ResolutionRule::Unguarded)
    }

    /// A save stands unless power clears a threshold and the breakthrough roll lands.
    fn try_breakthrough(
        &self,
        power: Option<f32>,
        rolls: &mut impl RollSource,
        save_rule: ResolutionRule,
    ) -> (Outcome, ResolutionRule) {
        let chance = power.map_or(0.0, |p| self.config.breakthrough_chance(p));
        if chance > 0.0 && rolls.next_roll() < chance {
            return (Outcome::PowerGoal, ResolutionRule::Breakthrough);
        }
        (Outcome::Saved, save_rule)
    }
}
