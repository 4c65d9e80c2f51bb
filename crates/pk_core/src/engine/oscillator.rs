//! Aim reticle and power gauge oscillators
//!
//! Both are pure functions of the session's logical clock, so the continuous-aim
//! variant stays deterministic: the value "under the cursor" is whatever the
//! oscillator reads at the millisecond the kick is taken.

use std::f64::consts::TAU;

use crate::config::OscillatorConfig;

/// Lissajous-style sweep across the goal frame.
#[derive(Debug, Clone, Copy)]
pub struct AimOscillator {
    pub amplitude: f32,
    pub frequency_x_hz: f32,
    pub frequency_y_hz: f32,
}

impl AimOscillator {
    pub fn from_config(cfg: &OscillatorConfig) -> Self {
        Self {
            amplitude: cfg.aim_amplitude,
            frequency_x_hz: cfg.aim_frequency_x_hz,
            frequency_y_hz: cfg.aim_frequency_y_hz,
        }
    }

    /// Reticle position at `t_ms`. Starts at the goal's center and may leave the frame
    /// when `amplitude > 0.5`.
    pub fn sample(&self, t_ms: u64) -> (f32, f32) {
        let t = t_ms as f64 / 1000.0;
        let amp = self.amplitude as f64;
        let x = 0.5 + amp * (TAU * self.frequency_x_hz as f64 * t).sin();
        let y = 0.5 + amp * (TAU * self.frequency_y_hz as f64 * t).sin();
        (x as f32, y as f32)
    }
}

/// Triangle-wave power gauge: 0 → 1 → 0 over one period.
#[derive(Debug, Clone, Copy)]
pub struct PowerMeter {
    pub period_ms: u64,
}

impl PowerMeter {
    pub fn from_config(cfg: &OscillatorConfig) -> Self {
        Self { period_ms: cfg.power_period_ms.max(1) }
    }

    pub fn sample(&self, t_ms: u64) -> f32 {
        let phase = (t_ms % self.period_ms) as f32 / self.period_ms as f32;
        1.0 - (2.0 * phase - 1.0).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_meter_triangle() {
        let meter = PowerMeter { period_ms: 1000 };
        assert_eq!(meter.sample(0), 0.0);
        assert!((meter.sample(250) - 0.5).abs() < 1e-6);
        assert!((meter.sample(500) - 1.0).abs() < 1e-6);
        assert!((meter.sample(750) - 0.5).abs() < 1e-6);
        assert_eq!(meter.sample(1000), 0.0);
    }

    #[test]
    fn test_power_meter_stays_in_unit_range() {
        let meter = PowerMeter::from_config(&OscillatorConfig::default());
        for t in (0..5000).step_by(7) {
            let p = meter.sample(t);
            assert!((0.0..=1.0).contains(&p), "power {p} at {t}");
        }
    }

    #[test]
    fn test_aim_starts_center() {
        let osc = AimOscillator { amplitude: 0.5, frequency_x_hz: 1.0, frequency_y_hz: 2.0 };
        let (x, y) = osc.sample(0);
        assert!((x - 0.5).abs() < 1e-6);
        assert!((y - 0.5).abs() < 1e-6);

        // quarter period of x: full right; half period of y: back at center
        let (x, y) = osc.sample(250);
        assert!((x - 1.0).abs() < 1e-5);
        assert!((y - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_default_sweep_leaves_frame() {
        let osc = AimOscillator::from_config(&OscillatorConfig::default());
        let off_frame = (0..4000).step_by(10).any(|t| {
            let (x, y) = osc.sample(t);
            !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y)
        });
        assert!(off_frame, "default amplitude should overshoot the goal frame");
    }
}
