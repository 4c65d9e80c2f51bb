//! Scheduled round effects
//!
//! A kick schedules a fixed chain of effects (keeper dive → ball arrives and the shot
//! is scored → round reset). They sit in a FIFO keyed by logical time and fire in the
//! order they were scheduled when the session clock passes their due time.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::config::TimingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundEffect {
    KeeperDive,
    ResolveShot,
    RoundReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEffect {
    pub due_ms: u64,
    pub effect: RoundEffect,
}

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    pending: VecDeque<ScheduledEffect>,
}

impl Timeline {
    pub fn new() -> Self {
        Self { pending: VecDeque::new() }
    }

    /// Schedule the three effects of a round kicked at `now_ms`.
    pub fn schedule_round(&mut self, now_ms: u64, timings: &TimingConfig) -> Vec<ScheduledEffect> {
        let round = [
            ScheduledEffect { due_ms: now_ms.saturating_add(timings.keeper_move_ms), effect: RoundEffect::KeeperDive },
            ScheduledEffect { due_ms: now_ms.saturating_add(timings.flight_ms), effect: RoundEffect::ResolveShot },
            ScheduledEffect { due_ms: now_ms.saturating_add(timings.reset_ms), effect: RoundEffect::RoundReset },
        ];
        for effect in round {
            self.schedule(effect);
        }
        round.to_vec()
    }

    /// Insert after every effect due at or before `effect.due_ms`, keeping FIFO order
    /// among equal due times.
    pub fn schedule(&mut self, effect: ScheduledEffect) {
        let idx = self.pending.iter().position(|e| e.due_ms > effect.due_ms).unwrap_or(self.pending.len());
        self.pending.insert(idx, effect);
    }

    /// Next effect due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<ScheduledEffect> {
        if self.pending.front()?.due_ms <= now_ms {
            self.pending.pop_front()
        } else {
            None
        }
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.front().map(|e| e.due_ms)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledEffect> {
        self.pending.iter()
    }
}
