// 세션 JSON API - 호스트 UI에서 호출
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ShootoutConfig;
use crate::engine::{
    ActionResult, AimSelection, GameEvent, RoundPhase, ScoreState, ShootoutSession, ShotRecord,
};
use crate::error::{Result, ShootoutError};
use crate::SCHEMA_VERSION;

/// 세션 요청
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub schema_version: u8,
    pub seed: u64,
    /// Preset name; ignored when `config` is given.
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub config: Option<ShootoutConfig>,
    #[serde(default)]
    pub actions: Vec<SessionAction>,
    #[serde(default = "default_include_events")]
    pub include_events: bool,
}

fn default_include_events() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionAction {
    /// Raw key code, e.g. `"ArrowLeft"`.
    Key { code: String },
    Aim { aim: AimSelection },
    Shoot,
    /// Advance the logical clock.
    Wait { ms: u64 },
    /// Play the round in flight to the end.
    FinishRound,
    /// Animation-complete signal from the host.
    Complete,
    Reset,
}

/// 세션 응답
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub phase: RoundPhase,
    pub score: ScoreState,
    pub status: String,
    pub aim_label: String,
    pub clock_ms: u64,
    pub history: Vec<ShotRecord>,
    /// One entry per action, in order.
    pub results: Vec<ActionResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<GameEvent>,
}

pub fn run_session(request: &SessionRequest) -> Result<SessionResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(ShootoutError::SchemaVersionMismatch {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let config = match (&request.config, &request.preset) {
        (Some(config), _) => config.clone(),
        (None, Some(name)) => ShootoutConfig::preset(name)?,
        (None, None) => ShootoutConfig::default(),
    };

    let mut session = ShootoutSession::new(config, request.seed)?;
    let mut results = Vec::with_capacity(request.actions.len());
    let mut events = Vec::new();

    for action in &request.actions {
        let result = match action {
            SessionAction::Key { code } => session.handle_key(code),
            SessionAction::Aim { aim } => session.set_aim(*aim),
            SessionAction::Shoot => session.shoot(),
            SessionAction::Wait { ms } => {
                session.advance(*ms);
                ActionResult::Applied
            }
            SessionAction::FinishRound => {
                session.finish_round();
                ActionResult::Applied
            }
            SessionAction::Complete => session.on_resolution_complete(),
            SessionAction::Reset => session.reset(),
        };
        results.push(result);
        if request.include_events {
            events.extend(session.drain_events());
        }
    }

    info!(
        seed = request.seed,
        actions = request.actions.len(),
        shots = session.score().shots,
        "session request processed"
    );

    Ok(SessionResponse {
        schema_version: SCHEMA_VERSION,
        seed: request.seed,
        phase: session.phase(),
        score: *session.score(),
        status: session.status().to_string(),
        aim_label: session.aim_label(),
        clock_ms: session.clock_ms(),
        history: session.history().to_vec(),
        results,
        events,
    })
}

/// JSON in, JSON out.
pub fn run_session_json(request_json: &str) -> Result<String> {
    let request: SessionRequest = serde_json::from_str(request_json)?;
    let response = run_session(&request)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_session() {
        let request = json!({
            "schema_version": 1,
            "seed": 42,
            "preset": "nine_zone",
            "actions": [
                {"type": "key", "code": "Digit1"},
                {"type": "shoot"},
                {"type": "finish_round"}
            ]
        });

        let result = run_session_json(&request.to_string());
        assert!(result.is_ok(), "Session should succeed");

        let parsed: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["score"]["shots"], 1);
        assert_eq!(parsed["phase"], "idle");
        assert_eq!(parsed["history"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["results"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_determinism() {
        let request = json!({
            "schema_version": 1,
            "seed": 999,
            "preset": "power_shot",
            "actions": [
                {"type": "wait", "ms": 250},
                {"type": "shoot"},
                {"type": "finish_round"},
                {"type": "wait", "ms": 730},
                {"type": "shoot"},
                {"type": "finish_round"}
            ]
        })
        .to_string();

        let first = run_session_json(&request).unwrap();
        let second = run_session_json(&request).unwrap();
        assert_eq!(first, second, "Same seed should produce same result");
    }

    #[test]
    fn test_ignored_actions_reported() {
        let request = json!({
            "schema_version": 1,
            "seed": 3,
            "actions": [
                {"type": "shoot"},
                {"type": "shoot"},
                {"type": "key", "code": "KeyQ"},
                {"type": "complete"},
                {"type": "complete"}
            ],
            "include_events": false
        });

        let response: serde_json::Value =
            serde_json::from_str(&run_session_json(&request.to_string()).unwrap()).unwrap();
        let results = response["results"].as_array().unwrap();
        assert_eq!(results[0]["result"], "applied");
        assert_eq!(results[1]["reason"], "locked");
        assert_eq!(results[2]["reason"], "unmapped_key");
        assert_eq!(results[3]["result"], "applied");
        assert_eq!(results[4]["reason"], "no_pending_resolution");
        assert!(response.get("events").is_none());
    }

    #[test]
    fn test_inline_config_overrides_preset() {
        let request = json!({
            "schema_version": 1,
            "seed": 1,
            "preset": "nine_zone",
            "config": {"layout": "six_zone", "win_score": 1},
            "actions": [
                {"type": "aim", "aim": {"kind": "zone", "zone": {"column": "right", "band": "top"}}}
            ]
        });

        let response: serde_json::Value =
            serde_json::from_str(&run_session_json(&request.to_string()).unwrap()).unwrap();
        assert_eq!(response["aim_label"], "Right / Top");
    }

    #[test]
    fn test_schema_version_mismatch() {
        let request = json!({"schema_version": 2, "seed": 1}).to_string();
        let err = run_session_json(&request).unwrap_err();
        assert!(matches!(err, ShootoutError::SchemaVersionMismatch { found: 2, expected: 1 }));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let request = json!({"schema_version": 1, "seed": 1, "preset": "golden_goal"}).to_string();
        assert!(matches!(run_session_json(&request), Err(ShootoutError::UnknownPreset(_))));
    }

    #[test]
    fn test_oversized_timings_rejected() {
        let request = json!({
            "schema_version": 1,
            "seed": 1,
            "config": {
                "layout": "six_zone",
                "timings": {"keeper_move_ms": 0, "flight_ms": 0, "reset_ms": u64::MAX}
            },
            "actions": [{"type": "wait", "ms": 5}, {"type": "shoot"}]
        })
        .to_string();
        let err = run_session_json(&request).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_host_completion_includes_keeper_dive() {
        let request = json!({
            "schema_version": 1,
            "seed": 8,
            "preset": "six_zone",
            "actions": [{"type": "shoot"}, {"type": "complete"}]
        })
        .to_string();
        let response: serde_json::Value =
            serde_json::from_str(&run_session_json(&request).unwrap()).unwrap();
        let events = response["events"].as_array().unwrap();
        assert!(events.iter().any(|e| e["type"] == "keeper_dived"));
        assert_eq!(response["score"]["shots"], 1);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(run_session_json("{not json"), Err(ShootoutError::Json(_))));
    }
}
