//! # Shoot-out Configuration
//!
//! 모든 튜닝 상수를 한 곳에서 관리한다.
//!
//! The four game variants are presets of the same [`ShootoutConfig`]:
//!
//! ```rust
//! use pk_core::config::ShootoutConfig;
//!
//! let classic = ShootoutConfig::classic();
//! let power = ShootoutConfig::preset("power_shot").unwrap();
//! assert!(power.resolution.power_enabled);
//! assert!(classic.win_score.is_none());
//! ```

mod resolution_config;
mod timing_config;

pub use resolution_config::ResolutionConfig;
pub use timing_config::{OscillatorConfig, TimingConfig, MAX_ROUND_MS};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::history::DEFAULT_HISTORY_CAPACITY;
use crate::engine::zone::GridLayout;
use crate::error::{Result, ShootoutError};

/// How the shooter aims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AimMode {
    /// Arrow keys / keypad pick a direction or zone.
    #[default]
    Discrete,
    /// An oscillating reticle is sampled at the moment of the kick.
    Continuous,
}

/// How the keeper picks a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeeperPolicyKind {
    #[default]
    Uniform,
    /// Weighted by the shooter's recent choices.
    Adaptive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeeperConfig {
    pub policy: KeeperPolicyKind,
    /// 빈도에 더해지는 바이어스 (기본: 0.15)
    pub bias_weight: f32,
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self { policy: KeeperPolicyKind::Uniform, bias_weight: 0.15 }
    }
}

/// Named preset identifiers accepted by [`ShootoutConfig::preset`].
pub const PRESET_NAMES: [&str; 4] = ["classic", "six_zone", "nine_zone", "power_shot"];

/// 승부차기 전체 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShootoutConfig {
    pub layout: GridLayout,
    pub aim_mode: AimMode,
    pub keeper: KeeperConfig,
    pub resolution: ResolutionConfig,
    pub history_capacity: usize,
    /// Score at or above which the shooter wins. `None` = open-ended tally.
    pub win_score: Option<i32>,
    /// Score at or below which the keeper wins.
    pub loss_score: Option<i32>,
    pub timings: TimingConfig,
    pub oscillator: OscillatorConfig,
}

impl Default for ShootoutConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl ShootoutConfig {
    /// 3 directions, adaptive keeper, open-ended tally.
    pub fn classic() -> Self {
        Self {
            layout: GridLayout::ThreeDirection,
            aim_mode: AimMode::Discrete,
            keeper: KeeperConfig { policy: KeeperPolicyKind::Adaptive, ..KeeperConfig::default() },
            resolution: ResolutionConfig::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            win_score: None,
            loss_score: None,
            timings: TimingConfig::default(),
            oscillator: OscillatorConfig::default(),
        }
    }

    /// Top/bottom × 3 grid, uniform keeper, first to ±5.
    pub fn six_zone() -> Self {
        let mut cfg = Self::classic();
        cfg.layout = GridLayout::SixZone;
        cfg.keeper.policy = KeeperPolicyKind::Uniform;
        cfg.resolution.neighbor_save_chance = 0.2;
        cfg.win_score = Some(5);
        cfg.loss_score = Some(-5);
        cfg.timings = TimingConfig { keeper_move_ms: 120, flight_ms: 420, reset_ms: 900 };
        cfg
    }

    /// 3 × 3 grid, uniform keeper, first to ±5.
    pub fn nine_zone() -> Self {
        let mut cfg = Self::six_zone();
        cfg.layout = GridLayout::NineZone;
        cfg.resolution.neighbor_save_chance = 0.16;
        cfg
    }

    /// Oscillating reticle + power gauge on a six-zone grid, adaptive keeper.
    pub fn power_shot() -> Self {
        let mut cfg = Self::six_zone();
        cfg.aim_mode = AimMode::Continuous;
        cfg.keeper.policy = KeeperPolicyKind::Adaptive;
        cfg.resolution.power_enabled = true;
        cfg.timings = TimingConfig { keeper_move_ms: 150, flight_ms: 650, reset_ms: 1100 };
        cfg
    }

    pub fn preset(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "classic" => Ok(Self::classic()),
            "six_zone" => Ok(Self::six_zone()),
            "nine_zone" => Ok(Self::nine_zone()),
            "power_shot" => Ok(Self::power_shot()),
            other => Err(ShootoutError::UnknownPreset(other.to_string())),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Whether a post-resolution score ends the session.
    pub fn is_terminal(&self, score: i32) -> bool {
        self.win_score.is_some_and(|w| score >= w) || self.loss_score.is_some_and(|l| score <= l)
    }

    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(err) = &result {
            warn!("rejected shoot-out config: {}", err);
        }
        result
    }

    fn check(&self) -> Result<()> {
        let probabilities = [
            ("resolution.neighbor_save_chance", self.resolution.neighbor_save_chance),
            ("resolution.direct_save_chance", self.resolution.direct_save_chance),
            ("resolution.power_breakthrough_high", self.resolution.power_breakthrough_high),
            ("resolution.power_breakthrough_mid", self.resolution.power_breakthrough_mid),
            ("resolution.power_high_threshold", self.resolution.power_high_threshold),
            ("resolution.power_mid_threshold", self.resolution.power_mid_threshold),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ShootoutError::invalid(field, format!("must be in [0, 1], got {value}")));
            }
        }
        if self.resolution.power_mid_threshold > self.resolution.power_high_threshold {
            return Err(ShootoutError::invalid(
                "resolution.power_mid_threshold",
                "must not exceed power_high_threshold",
            ));
        }
        if !self.keeper.bias_weight.is_finite() || self.keeper.bias_weight <= 0.0 {
            return Err(ShootoutError::invalid("keeper.bias_weight", "must be positive"));
        }
        if self.history_capacity == 0 {
            return Err(ShootoutError::invalid("history_capacity", "must be at least 1"));
        }
        if self.win_score.is_some_and(|w| w <= 0) {
            return Err(ShootoutError::invalid("win_score", "must be positive"));
        }
        if self.loss_score.is_some_and(|l| l >= 0) {
            return Err(ShootoutError::invalid("loss_score", "must be negative"));
        }
        if !self.timings.is_ordered() {
            return Err(ShootoutError::invalid(
                "timings",
                "keeper_move_ms <= flight_ms <= reset_ms must hold",
            ));
        }
        if !self.timings.is_bounded() {
            return Err(ShootoutError::invalid(
                "timings.reset_ms",
                format!("must not exceed {MAX_ROUND_MS} ms, got {}", self.timings.reset_ms),
            ));
        }
        if self.oscillator.power_period_ms == 0 {
            return Err(ShootoutError::invalid("oscillator.power_period_ms", "must be non-zero"));
        }
        Ok(())
    }
}

// ========== Tests ==========
