//! # pk_core - Deterministic Penalty Shoot-out Engine
//!
//! One configurable engine behind every penalty-kick mini-game variant: three
//! directions, six or nine goal zones, oscillating aim with a power gauge, uniform
//! or adaptive keeper.
//!
//! ## Features
//! - Same config + seed + inputs = same game (all randomness through [`engine::RollSource`])
//! - Explicit round phases; out-of-phase input is reported, never an error
//! - Logical clock instead of timers, so whole rounds run in tests
//! - JSON API for host UIs

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;

pub use api::{run_session_json, SessionRequest, SessionResponse};
pub use config::{AimMode, KeeperPolicyKind, ShootoutConfig};
pub use engine::{
    ActionResult, AimSelection, GameEvent, IgnoreReason, Outcome, RoundPhase, ScoreState,
    ShootoutSession, ShotHistory, ShotRecord, Zone,
};
pub use error::{Result, ShootoutError};
pub use input::{map_key, InputAction};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
