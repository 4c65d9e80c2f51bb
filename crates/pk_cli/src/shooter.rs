//! Scripted shooter for `simulate`

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, info};

use pk_core::config::AimMode;
use pk_core::engine::rolls::{pick_index, seeded};
use pk_core::engine::{
    AimSelection, Column, GridLayout, Height, RollSource, RoundPhase, ScoreState, ShootoutSession,
    ShotRecord,
};
use pk_core::ShootoutConfig;

/// Shooter aiming behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShooterStrategy {
    /// Uniform random target each shot
    Random,
    /// Always the default target
    Fixed,
    /// Walk every target of the layout in order
    Sweep,
}

/// Shooter stream is decorrelated from the keeper's.
const SHOOTER_SEED_SALT: u64 = 0x5EED_5400_7E12;

/// Longest wait before a continuous-aim kick.
const MAX_AIM_WAIT_MS: u64 = 2000;

#[derive(Debug, Serialize)]
pub struct SimulationSummary {
    pub seed: u64,
    pub layout: GridLayout,
    pub strategy: ShooterStrategy,
    pub shots_requested: u32,
    pub phase: RoundPhase,
    pub status: String,
    pub score: ScoreState,
    pub conversion_rate: f32,
    /// Last shots kept by the session history.
    pub recent: Vec<ShotRecord>,
}

/// Targets the shooter can pick in `layout`.
fn targets(layout: GridLayout) -> Vec<AimSelection> {
    match layout {
        GridLayout::ThreeDirection => Column::ALL
            .iter()
            .flat_map(|&column| {
                [Height::Low, Height::Mid, Height::High]
                    .into_iter()
                    .map(move |height| AimSelection::Directional { column, height })
            })
            .collect(),
        _ => layout.zones().into_iter().map(|zone| AimSelection::Zone { zone }).collect(),
    }
}

/// Play up to `shots` rounds, stopping early if the session ends.
pub fn simulate(
    config: ShootoutConfig,
    seed: u64,
    shots: u32,
    strategy: ShooterStrategy,
) -> Result<SimulationSummary> {
    let layout = config.layout;
    let continuous = config.aim_mode == AimMode::Continuous;
    let mut session = ShootoutSession::new(config, seed)?;
    let mut shooter = seeded(seed ^ SHOOTER_SEED_SALT);
    let targets = targets(layout);

    for n in 0..shots {
        if session.phase() == RoundPhase::GameOver {
            info!(shot = n, "session over, stopping early");
            break;
        }

        if continuous {
            // reticle moves on its own; the only choice is when to kick
            let wait = match strategy {
                ShooterStrategy::Random => {
                    (shooter.next_roll() * MAX_AIM_WAIT_MS as f32) as u64
                }
                ShooterStrategy::Fixed => 0,
                ShooterStrategy::Sweep => (n as u64 * 97) % MAX_AIM_WAIT_MS,
            };
            session.advance(wait);
        } else {
            let aim = match strategy {
                ShooterStrategy::Random => targets[pick_index(shooter.next_roll(), targets.len())],
                ShooterStrategy::Fixed => AimSelection::default_for(layout, false),
                ShooterStrategy::Sweep => targets[n as usize % targets.len()],
            };
            session.set_aim(aim);
        }

        session.shoot();
        session.finish_round();
        debug!(shot = n, status = session.status(), "round finished");
    }

    let score = *session.score();
    Ok(SimulationSummary {
        seed,
        layout,
        strategy,
        shots_requested: shots,
        phase: session.phase(),
        status: session.status().to_string(),
        conversion_rate: score.conversion_rate(),
        score,
        recent: session.history().to_vec(),
    })
}
