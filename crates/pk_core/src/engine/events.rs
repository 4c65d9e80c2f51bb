//! Session events
//!
//! Everything a render or scoreboard sink needs, pushed in the order it happened.
//! Hosts drain them after each input or clock advance.

use serde::{Deserialize, Serialize};

use super::resolver::{Outcome, ResolutionRule};
use super::score::ScoreState;
use super::session::RoundPhase;
use super::zone::{AimSelection, Zone};

pub const STATUS_READY: &str = "Pick a direction for the next shot.";
pub const STATUS_SHOOTING: &str = "Shooting...";
pub const STATUS_RESET: &str = "Score reset. Aim and shoot!";
pub const STATUS_WIN: &str = "You win the shoot-out!";
pub const STATUS_LOSS: &str = "The keeper wins the shoot-out.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    AimChanged {
        aim: AimSelection,
        label: String,
    },
    ShotTaken {
        round: u32,
        aim: AimSelection,
        power: Option<f32>,
        /// Ball target offset (px) for the render sink.
        target: (f32, f32),
        at_ms: u64,
    },
    KeeperDived {
        round: u32,
        zone: Zone,
        /// Horizontal dive offset (px).
        offset_x: f32,
        at_ms: u64,
    },
    ShotResolved {
        round: u32,
        outcome: Outcome,
        rule: ResolutionRule,
        score: ScoreState,
        at_ms: u64,
    },
    PhaseChanged {
        from: RoundPhase,
        to: RoundPhase,
    },
    ScoreReset,
    Status {
        message: String,
    },
}

impl GameEvent {
    pub fn status(message: impl Into<String>) -> Self {
        GameEvent::Status { message: message.into() }
    }
}
