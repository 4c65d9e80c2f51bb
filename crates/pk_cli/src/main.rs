//! Shoot-out CLI
//!
//! 터미널에서 승부차기 엔진 실행
//! - simulate: scripted shooter, JSON summary
//! - play: key codes from stdin, one per line
//! - run: JSON session request file → JSON response

mod config_file;
mod shooter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use pk_core::engine::{ActionResult, RoundPhase, ShootoutSession};
use pk_core::ShootoutConfig;

use shooter::{ShooterStrategy, SimulationSummary};

#[derive(Parser)]
#[command(name = "pk_cli")]
#[command(about = "Penalty shoot-out engine driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a number of shots with a scripted shooter
    Simulate {
        /// Preset name (classic, six_zone, nine_zone, power_shot)
        #[arg(long, default_value = "classic")]
        preset: String,

        /// Config file (JSON or YAML); overrides the preset
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, default_value = "42")]
        seed: u64,

        /// Number of shots to take
        #[arg(long, default_value = "20")]
        shots: u32,

        #[arg(long, value_enum, default_value = "random")]
        strategy: ShooterStrategy,
    },

    /// Interactive play: one key code per line on stdin
    Play {
        #[arg(long, default_value = "classic")]
        preset: String,

        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Execute a JSON session request
    Run {
        /// Input request JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Output response file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { preset, config, seed, shots, strategy } => {
            let config = config_file::resolve(&preset, config.as_deref())?;
            let summary = shooter::simulate(config, seed, shots, strategy)?;
            print_summary(&summary)?;
        }

        Commands::Play { preset, config, seed } => {
            let config = config_file::resolve(&preset, config.as_deref())?;
            play(config, seed)?;
        }

        Commands::Run { r#in, out } => {
            let request = std::fs::read_to_string(&r#in)
                .with_context(|| format!("Failed to read request file: {}", r#in.display()))?;
            let response = pk_core::run_session_json(&request)
                .with_context(|| format!("Session request failed: {}", r#in.display()))?;

            match out {
                Some(path) => {
                    std::fs::write(&path, &response).with_context(|| {
                        format!("Failed to write response file: {}", path.display())
                    })?;
                    eprintln!("Response written to {}", path.display());
                }
                None => println!("{}", response),
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &SimulationSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
    println!("{}", json);
    Ok(())
}

fn play(config: ShootoutConfig, seed: u64) -> Result<()> {
    let mut session = ShootoutSession::new(config, seed)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("⚽ Penalty shoot-out ({} / {})", session.aim_label(), session.status());
    println!("   Keys: ArrowLeft ArrowRight ArrowUp ArrowDown Digit1-9 Space KeyR, quit to exit");

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let code = line.trim();
        if code.is_empty() {
            continue;
        }
        if code == "quit" {
            break;
        }

        match session.handle_key(code) {
            ActionResult::Applied => {}
            ActionResult::Ignored(reason) => println!("   (ignored: {:?})", reason),
        }
        if session.phase() == RoundPhase::Locked {
            session.finish_round();
        }

        let score = session.score();
        println!(
            "   {} | aim {} | score {} (goals {} saves {} misses {} shots {})",
            session.status(),
            session.aim_label(),
            score.score,
            score.goals,
            score.saves,
            score.misses,
            score.shots
        );
        stdout.flush().context("Failed to flush stdout")?;
    }

    Ok(())
}
