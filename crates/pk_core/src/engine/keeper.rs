//! Keeper policy
//!
//! Picks the zone the keeper dives toward. Uniform keepers ignore history; adaptive
//! keepers lean toward where the shooter has been going, with a flat bias added to
//! every option so no zone is ever unguarded or certain.

use tracing::debug;

use super::history::ShotHistory;
use super::rolls::{pick_index, RollSource};
use super::zone::{Band, Column, GridLayout, Zone};
use crate::config::{KeeperPolicyKind, ShootoutConfig};

#[derive(Debug, Clone, Copy)]
pub struct KeeperPolicy {
    pub kind: KeeperPolicyKind,
    pub bias_weight: f32,
    pub layout: GridLayout,
}

impl KeeperPolicy {
    pub fn from_config(cfg: &ShootoutConfig) -> Self {
        Self { kind: cfg.keeper.policy, bias_weight: cfg.keeper.bias_weight, layout: cfg.layout }
    }

    /// 키퍼 반응 선택
    ///
    /// Consumes exactly one roll.
    pub fn choose_reaction(&self, history: &ShotHistory, rolls: &mut impl RollSource) -> Zone {
        let reaction = match self.kind {
            KeeperPolicyKind::Uniform => self.uniform(rolls),
            KeeperPolicyKind::Adaptive => match self.reaction_weights(history) {
                Some(weights) => self.weighted(&weights, rolls),
                None => self.uniform(rolls),
            },
        };
        debug!(policy = ?self.kind, reaction = %reaction.key(), "keeper reaction chosen");
        reaction
    }

    fn uniform(&self, rolls: &mut impl RollSource) -> Zone {
        let zones = self.layout.zones();
        zones[pick_index(rolls.next_roll(), zones.len())]
    }

    fn weighted(&self, weights: &[(Zone, f32)], rolls: &mut impl RollSource) -> Zone {
        let values: Vec<f32> = weights.iter().map(|(_, w)| *w).collect();
        match cumulative_pick(&values, rolls.next_roll()) {
            Some(idx) => weights[idx].0,
            None => self.layout.default_zone(),
        }
    }

    /// Adaptive weights (frequency + bias) per reaction choice, or `None` without
    /// usable history.
    ///
    /// Three-direction layouts weigh columns; gridded layouts weigh zones.
    pub fn reaction_weights(&self, history: &ShotHistory) -> Option<Vec<(Zone, f32)>> {
        let counts: Vec<(Zone, u32)> = if self.layout.has_bands() {
            history.zone_counts(self.layout)
        } else {
            let by_column = history.direction_counts();
            Column::ALL.iter().map(|&c| (Zone::new(c, Band::Middle), by_column[c.index()])).collect()
        };

        let total: u32 = counts.iter().map(|(_, n)| n).sum();
        if total == 0 {
            return None;
        }

        Some(
            counts
                .into_iter()
                .map(|(zone, n)| (zone, n as f32 / total as f32 + self.bias_weight))
                .collect(),
        )
    }
}

/// Roulette pick: `roll` in `[0,1)` is scaled to the weight total, the first index
/// whose running sum meets the scaled roll wins. `None` if float rounding runs past
/// the end or the weights are empty.
pub fn cumulative_pick(weights: &[f32], roll: f32) -> Option<usize> {
    let sum: f32 = weights.iter().sum();
    if weights.is_empty() || sum <= 0.0 || !sum.is_finite() {
        return None;
    }
    let target = roll * sum;
    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w;
        if target <= cumulative {
            return Some(i);
        }
    }
    None
}
