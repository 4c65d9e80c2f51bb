//! Round timing and oscillator parameters

use serde::{Deserialize, Serialize};

/// Delays (ms after the kick) of the scheduled round effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// 키퍼 다이브 시작 (기본: 0)
    pub keeper_move_ms: u64,
    /// 공 도착 + 판정 (기본: 500)
    pub flight_ms: u64,
    /// 라운드 리셋 (기본: 1100)
    pub reset_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { keeper_move_ms: 0, flight_ms: 500, reset_ms: 1100 }
    }
}

/// Longest accepted round (ms from kick to reset).
pub const MAX_ROUND_MS: u64 = 60_000;

impl TimingConfig {
    pub fn is_bounded(&self) -> bool {
        self.reset_ms <= MAX_ROUND_MS
    }

    pub fn is_ordered(&self) -> bool {
        self.keeper_move_ms <= self.flight_ms && self.flight_ms <= self.reset_ms
    }
}

/// Sweep of the continuous aim reticle and the power gauge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    /// Half-width of the sweep around the goal center. Above 0.5 it leaves the frame.
    pub aim_amplitude: f32,
    pub aim_frequency_x_hz: f32,
    pub aim_frequency_y_hz: f32,
    /// One full empty → full → empty cycle of the power gauge.
    pub power_period_ms: u64,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            aim_amplitude: 0.6,
            aim_frequency_x_hz: 0.55,
            aim_frequency_y_hz: 0.85,
            power_period_ms: 1400,
        }
    }
}
