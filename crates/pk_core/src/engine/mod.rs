//! Shoot-out engine
//!
//! Leaf to root: [`zone`] geometry, [`rolls`], [`history`] and [`score`] state,
//! [`keeper`] policy, [`resolver`], then the [`session`] controller that owns them
//! all and plays rounds out over the [`timeline`].

pub mod events;
pub mod history;
pub mod keeper;
pub mod oscillator;
pub mod resolver;
pub mod rolls;
pub mod score;
pub mod session;
pub mod timeline;
pub mod zone;

pub use events::GameEvent;
pub use history::{ShotHistory, ShotRecord};
pub use keeper::KeeperPolicy;
pub use oscillator::{AimOscillator, PowerMeter};
pub use resolver::{Outcome, OutcomeResolver, Resolution, ResolutionRule};
pub use rolls::{RollSource, ScriptedRolls};
pub use score::ScoreState;
pub use session::{ActionResult, CommittedShot, IgnoreReason, RoundPhase, ShootoutSession};
pub use timeline::{RoundEffect, ScheduledEffect, Timeline};
pub use zone::{AimSelection, Band, Column, GridLayout, Height, Zone};
