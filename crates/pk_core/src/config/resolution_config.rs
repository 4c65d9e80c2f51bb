//! Shot resolution probabilities

use serde::{Deserialize, Serialize};

/// 슛 판정 파라미터
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    // === Band rules ===
    /// 같은 높이(다른 열)에서 키퍼가 막을 확률 (기본: 0.18)
    pub neighbor_save_chance: f32,
    /// 3방향 모드에서 방향 일치 시 세이브 확률 (기본: 0.65)
    pub direct_save_chance: f32,

    // === Power mechanic ===
    /// 파워 게이지 사용 여부 (기본: false)
    pub power_enabled: bool,
    /// 강슛 돌파 확률, 파워가 상위 기준 초과 시 (기본: 0.38)
    pub power_breakthrough_high: f32,
    /// 강슛 돌파 확률, 파워가 중간 기준 초과 시 (기본: 0.20)
    pub power_breakthrough_mid: f32,
    /// 강슛 상위 기준 (기본: 0.9)
    pub power_high_threshold: f32,
    /// 강슛 중간 기준 (기본: 0.75)
    pub power_mid_threshold: f32,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            neighbor_save_chance: 0.18,
            direct_save_chance: 0.65,

            power_enabled: false,
            power_breakthrough_high: 0.38,
            power_breakthrough_mid: 0.20,
            power_high_threshold: 0.9,
            power_mid_threshold: 0.75,
        }
    }
}

impl ResolutionConfig {
    /// Chance that an exact-match save is broken by power. Strict thresholds.
    pub fn breakthrough_chance(&self, power: f32) -> f32 {
        if power > self.power_high_threshold {
            self.power_breakthrough_high
        } else if power > self.power_mid_threshold {
            self.power_breakthrough_mid
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakthrough_steps() {
        let cfg = ResolutionConfig::default();
        assert_eq!(cfg.breakthrough_chance(0.95), 0.38);
        assert_eq!(cfg.breakthrough_chance(0.9), 0.20);
        assert_eq!(cfg.breakthrough_chance(0.8), 0.20);
        assert_eq!(cfg.breakthrough_chance(0.75), 0.0);
        assert_eq!(cfg.breakthrough_chance(0.1), 0.0);
    }
}
