//! Shoot-out session
//!
//! One owning controller per game: round phase, aim, score, shot history, the
//! scheduled effects of the round in flight and the roll source. Every operation
//! takes `&mut self`; there is no shared or global state.
//!
//! ```text
//! Idle ──shoot──▶ Locked ──round complete──▶ Idle
//!                    │
//!                    └──score hits win/loss──▶ GameOver ──reset──▶ Idle
//! ```
//!
//! Input that does not fit the current phase is not an error: it comes back as
//! [`ActionResult::Ignored`] and nothing changes.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::events::{
    GameEvent, STATUS_LOSS, STATUS_READY, STATUS_RESET, STATUS_SHOOTING, STATUS_WIN,
};
use super::history::{ShotHistory, ShotRecord};
use super::keeper::KeeperPolicy;
use super::oscillator::{AimOscillator, PowerMeter};
use super::resolver::{OutcomeResolver, Resolution};
use super::rolls::{self, RollSource};
use super::score::ScoreState;
use super::timeline::{RoundEffect, ScheduledEffect, Timeline};
use super::zone::{AimSelection, Zone};
use crate::config::{AimMode, ShootoutConfig};
use crate::error::Result;
use crate::input::{map_key, InputAction};

/// 라운드 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    #[default]
    Idle,
    Locked,
    GameOver,
}

/// Why an input was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// A shot is in flight.
    Locked,
    /// Win or loss reached; only reset is accepted.
    GameOver,
    /// Round completion signalled with no shot in flight.
    NoPendingResolution,
    /// Key code with no mapping.
    UnmappedKey,
    /// Stepping input while the reticle is oscillator-driven.
    NotSteerable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "reason", rename_all = "snake_case")]
pub enum ActionResult {
    Applied,
    Ignored(IgnoreReason),
}

impl ActionResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionResult::Applied)
    }
}

/// The shot of the round in flight. Decided at kick time, scored when the ball lands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommittedShot {
    pub round: u32,
    pub aim: AimSelection,
    pub keeper_zone: Zone,
    pub resolution: Resolution,
    pub taken_at_ms: u64,
    pub scored: bool,
}

pub struct ShootoutSession<R: RollSource = ChaCha8Rng> {
    config: ShootoutConfig,
    phase: RoundPhase,
    aim: AimSelection,
    score: ScoreState,
    history: ShotHistory,
    in_flight: Option<CommittedShot>,
    timeline: Timeline,
    clock_ms: u64,
    round: u32,
    status: String,
    events: Vec<GameEvent>,
    rolls: R,
}

impl ShootoutSession<ChaCha8Rng> {
    /// Seeded session: same config + seed + inputs = same game.
    pub fn new(config: ShootoutConfig, seed: u64) -> Result<Self> {
        Self::with_rolls(config, rolls::seeded(seed))
    }
}

impl<R: RollSource> ShootoutSession<R> {
    pub fn with_rolls(config: ShootoutConfig, rolls: R) -> Result<Self> {
        config.validate()?;
        let aim = default_aim(&config);
        let history = ShotHistory::new(config.history_capacity);
        Ok(Self {
            config,
            phase: RoundPhase::Idle,
            aim,
            score: ScoreState::new(),
            history,
            in_flight: None,
            timeline: Timeline::new(),
            clock_ms: 0,
            round: 0,
            status: STATUS_READY.to_string(),
            events: Vec::new(),
            rolls,
        })
    }

    // ========================
    // Accessors
    // ========================

    pub fn config(&self) -> &ShootoutConfig {
        &self.config
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn aim(&self) -> AimSelection {
        self.aim
    }

    pub fn aim_label(&self) -> String {
        self.aim.label()
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn history(&self) -> &ShotHistory {
        &self.history
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn in_flight(&self) -> Option<&CommittedShot> {
        self.in_flight.as_ref()
    }

    pub fn pending_effects(&self) -> Vec<ScheduledEffect> {
        self.timeline.iter().copied().collect()
    }

    pub fn rolls_mut(&mut self) -> &mut R {
        &mut self.rolls
    }

    /// Where the oscillating reticle is right now (continuous aim only).
    pub fn reticle(&self) -> Option<(f32, f32)> {
        (self.config.aim_mode == AimMode::Continuous)
            .then(|| AimOscillator::from_config(&self.config.oscillator).sample(self.clock_ms))
    }

    /// Current power gauge reading (power mechanic only).
    pub fn power_gauge(&self) -> Option<f32> {
        self.config
            .resolution
            .power_enabled
            .then(|| PowerMeter::from_config(&self.config.oscillator).sample(self.clock_ms))
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================
    // Aim
    // ========================

    /// Replace the aim. Only accepted while idle, and never while the reticle is
    /// oscillator-driven.
    pub fn set_aim(&mut self, aim: AimSelection) -> ActionResult {
        if self.config.aim_mode == AimMode::Continuous {
            return self.not_steerable("set_aim");
        }
        if let Some(reason) = self.idle_guard() {
            return self.ignore("set_aim", reason);
        }
        self.aim = aim;
        self.events.push(GameEvent::AimChanged { aim, label: aim.label() });
        ActionResult::Applied
    }

    /// Step the column (`-1` left, `+1` right).
    pub fn step_column(&mut self, delta: i32) -> ActionResult {
        let next = match self.aim {
            AimSelection::Directional { column, height } => {
                let column = if delta < 0 { column.step_left() } else { column.step_right() };
                AimSelection::Directional { column, height }
            }
            AimSelection::Zone { zone } => {
                let column =
                    if delta < 0 { zone.column.step_left() } else { zone.column.step_right() };
                AimSelection::Zone { zone: Zone::new(column, zone.band) }
            }
            AimSelection::Continuous { .. } => return self.not_steerable("step_column"),
        };
        self.set_aim(next)
    }

    /// Step the height (`-1` up, `+1` down).
    pub fn step_height(&mut self, delta: i32) -> ActionResult {
        let next = match self.aim {
            AimSelection::Directional { column, height } => {
                let height = if delta < 0 { height.step_up() } else { height.step_down() };
                AimSelection::Directional { column, height }
            }
            AimSelection::Zone { zone } => {
                AimSelection::Zone { zone: self.config.layout.step_band(zone, delta) }
            }
            AimSelection::Continuous { .. } => return self.not_steerable("step_height"),
        };
        self.set_aim(next)
    }

    /// Pick a zone by keypad digit.
    pub fn aim_digit(&mut self, digit: u8) -> ActionResult {
        if matches!(self.aim, AimSelection::Continuous { .. }) {
            return self.not_steerable("aim_digit");
        }
        match self.config.layout.zone_for_digit(digit) {
            Some(zone) => self.set_aim(AimSelection::Zone { zone }),
            None => self.ignore("aim_digit", IgnoreReason::UnmappedKey),
        }
    }

    // ========================
    // Round
    // ========================

    /// Kick. Commits the aim, draws the keeper reaction, decides the outcome and
    /// schedules the round's effects. Nothing is scored until the ball lands.
    pub fn shoot(&mut self) -> ActionResult {
        if let Some(reason) = self.idle_guard() {
            return self.ignore("shoot", reason);
        }

        if let Some((x, y)) = self.reticle() {
            self.aim = AimSelection::Continuous { x, y };
        }
        let power = self.power_gauge();
        let aim = self.aim;
        let shot_zone = aim.resolve_zone(self.config.layout);

        let keeper_zone =
            KeeperPolicy::from_config(&self.config).choose_reaction(&self.history, &mut self.rolls);
        let resolution = OutcomeResolver::new(self.config.layout, &self.config.resolution).resolve(
            shot_zone,
            keeper_zone,
            power,
            &mut self.rolls,
        );

        self.round += 1;
        self.in_flight = Some(CommittedShot {
            round: self.round,
            aim,
            keeper_zone,
            resolution,
            taken_at_ms: self.clock_ms,
            scored: false,
        });
        self.timeline.schedule_round(self.clock_ms, &self.config.timings);

        info!(round = self.round, aim = %aim.label(), ?power, "shot taken");
        self.events.push(GameEvent::ShotTaken {
            round: self.round,
            aim,
            power,
            target: aim.target_offset(),
            at_ms: self.clock_ms,
        });
        self.set_phase(RoundPhase::Locked);
        self.set_status(STATUS_SHOOTING);
        ActionResult::Applied
    }

    /// Advance the logical clock, firing every scheduled effect that falls due, in order.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let target = self.clock_ms.saturating_add(elapsed_ms);
        while let Some(due) = self.timeline.next_due_ms().filter(|due| *due <= target) {
            self.clock_ms = self.clock_ms.max(due);
            let Some(scheduled) = self.timeline.pop_due(self.clock_ms) else {
                break;
            };
            self.fire(scheduled.effect);
        }
        self.clock_ms = target;
    }

    /// Run the clock until the round in flight (if any) has fully played out.
    pub fn finish_round(&mut self) {
        if let Some(last) = self.timeline.iter().map(|e| e.due_ms).max() {
            self.advance(last.saturating_sub(self.clock_ms));
        }
    }

    /// Signal from the animation driver that playback is over.
    ///
    /// Plays a keeper dive that has not fired yet, scores the shot if its landing has
    /// not fired yet, drops the round's remaining effects, then unlocks, or ends the
    /// game when the score crosses a threshold.
    pub fn on_resolution_complete(&mut self) -> ActionResult {
        if self.phase != RoundPhase::Locked || self.in_flight.is_none() {
            return self.ignore("on_resolution_complete", IgnoreReason::NoPendingResolution);
        }
        if self.timeline.iter().any(|e| e.effect == RoundEffect::KeeperDive) {
            self.fire(RoundEffect::KeeperDive);
        }
        self.score_in_flight();
        self.in_flight = None;
        self.timeline.clear();

        if self.config.is_terminal(self.score.score) {
            let won = self.config.win_score.is_some_and(|w| self.score.score >= w);
            info!(score = self.score.score, won, "shoot-out over");
            self.set_phase(RoundPhase::GameOver);
            self.set_status(if won { STATUS_WIN } else { STATUS_LOSS });
        } else {
            self.set_phase(RoundPhase::Idle);
            self.set_status(STATUS_READY);
        }
        ActionResult::Applied
    }

    /// Zero the score, clear history and any round in flight, back to idle. Always accepted.
    pub fn reset(&mut self) -> ActionResult {
        self.score.reset();
        self.history.clear();
        self.timeline.clear();
        self.in_flight = None;
        self.aim = default_aim(&self.config);
        self.events.push(GameEvent::ScoreReset);
        self.set_phase(RoundPhase::Idle);
        self.set_status(STATUS_RESET);
        info!("score reset");
        ActionResult::Applied
    }

    // ========================
    // Input
    // ========================

    pub fn handle_action(&mut self, action: InputAction) -> ActionResult {
        match action {
            InputAction::AimLeft => self.step_column(-1),
            InputAction::AimRight => self.step_column(1),
            InputAction::AimUp => self.step_height(-1),
            InputAction::AimDown => self.step_height(1),
            InputAction::AimZone { digit } => self.aim_digit(digit),
            InputAction::Shoot => self.shoot(),
            InputAction::Reset => self.reset(),
        }
    }

    pub fn handle_key(&mut self, code: &str) -> ActionResult {
        match map_key(code) {
            Some(action) => self.handle_action(action),
            None => self.ignore("handle_key", IgnoreReason::UnmappedKey),
        }
    }

    // ========================
    // Internals
    // ========================

    fn fire(&mut self, effect: RoundEffect) {
        match effect {
            RoundEffect::KeeperDive => {
                if let Some(shot) = &self.in_flight {
                    self.events.push(GameEvent::KeeperDived {
                        round: shot.round,
                        zone: shot.keeper_zone,
                        offset_x: shot.keeper_zone.column.keeper_offset(),
                        at_ms: self.clock_ms,
                    });
                }
            }
            RoundEffect::ResolveShot => self.score_in_flight(),
            RoundEffect::RoundReset => {
                self.on_resolution_complete();
            }
        }
    }

    /// Apply the in-flight shot to score and history, once.
    fn score_in_flight(&mut self) {
        let Some(shot) = self.in_flight.as_mut() else {
            return;
        };
        if shot.scored {
            return;
        }
        shot.scored = true;
        let shot = *shot;

        let outcome = shot.resolution.outcome;
        self.score.apply(outcome);
        self.history.push(ShotRecord {
            position: shot.aim.position(),
            zone: shot.resolution.shot_zone,
            outcome,
        });
        debug!(round = shot.round, ?outcome, score = self.score.score, "shot scored");

        self.events.push(GameEvent::ShotResolved {
            round: shot.round,
            outcome,
            rule: shot.resolution.rule,
            score: self.score,
            at_ms: self.clock_ms,
        });
        self.set_status(outcome.status_message());
    }

    fn idle_guard(&self) -> Option<IgnoreReason> {
        match self.phase {
            RoundPhase::Idle => None,
            RoundPhase::Locked => Some(IgnoreReason::Locked),
            RoundPhase::GameOver => Some(IgnoreReason::GameOver),
        }
    }

    fn not_steerable(&self, op: &'static str) -> ActionResult {
        match self.idle_guard() {
            Some(reason) => self.ignore(op, reason),
            None => self.ignore(op, IgnoreReason::NotSteerable),
        }
    }

    fn ignore(&self, op: &'static str, reason: IgnoreReason) -> ActionResult {
        debug!(op, ?reason, phase = ?self.phase, "input ignored");
        ActionResult::Ignored(reason)
    }

    fn set_phase(&mut self, to: RoundPhase) {
        if self.phase != to {
            self.events.push(GameEvent::PhaseChanged { from: self.phase, to });
            self.phase = to;
        }
    }

    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
        self.events.push(GameEvent::status(message));
    }
}

fn default_aim(config: &ShootoutConfig) -> AimSelection {
    AimSelection::default_for(config.layout, config.aim_mode == AimMode::Continuous)
}
