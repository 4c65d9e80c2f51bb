//! Shot history
//!
//! Bounded FIFO of the most recent shots. The adaptive keeper reads the zones,
//! the mini-map reads positions and outcomes.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::resolver::Outcome;
use super::zone::{Column, GridLayout, Zone};

/// Default number of shots remembered.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// 슛 기록
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Aim position as ratios of the goal frame.
    pub position: (f32, f32),
    /// Resolved zone; `None` when the shot was off frame.
    pub zone: Option<Zone>,
    pub outcome: Outcome,
}

impl ShotRecord {
    pub fn is_scored(&self) -> bool {
        self.outcome.is_goal()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotHistory {
    records: VecDeque<ShotRecord>,
    capacity: usize,
}

impl Default for ShotHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl ShotHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { records: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append a record, evicting the oldest one at capacity.
    pub fn push(&mut self, record: ShotRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ShotRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&ShotRecord> {
        self.records.back()
    }

    pub fn to_vec(&self) -> Vec<ShotRecord> {
        self.records.iter().copied().collect()
    }

    /// Shots per column, indexed by [`Column::index`]. Off-frame shots are skipped.
    pub fn direction_counts(&self) -> [u32; 3] {
        let mut counts = [0u32; 3];
        for zone in self.records.iter().filter_map(|r| r.zone) {
            counts[zone.column.index()] += 1;
        }
        counts
    }

    /// Shots per zone of `layout`, in [`GridLayout::zones`] order.
    pub fn zone_counts(&self, layout: GridLayout) -> Vec<(Zone, u32)> {
        let mut counts: Vec<(Zone, u32)> = layout.zones().into_iter().map(|z| (z, 0)).collect();
        for zone in self.records.iter().filter_map(|r| r.zone) {
            let zone = layout.normalize(zone);
            if let Some(slot) = counts.iter_mut().find(|(z, _)| *z == zone) {
                slot.1 += 1;
            }
        }
        counts
    }

    /// Most frequently targeted column, ties broken left to right.
    pub fn favourite_column(&self) -> Option<Column> {
        let counts = self.direction_counts();
        let max = *counts.iter().max()?;
        if max == 0 {
            return None;
        }
        Column::ALL.iter().copied().find(|c| counts[c.index()] == max)
    }
}
