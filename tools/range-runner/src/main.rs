//! range-runner: drive a headless range session from the command line.
//!
//! Usage:
//!   range-runner --config range.toml --ticks 600
//!   range-runner --ticks 300 --json > final.json

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};

use tankrange_core::commands::SessionCommand;
use tankrange_core::config::RangeConfig;
use tankrange_core::state::RangeSnapshot;
use tankrange_sim::SimulationEngine;

const DEFAULT_TICKS: u64 = 600;

/// Frames between scripted shots.
const FIRE_INTERVAL: u64 = 45;

/// Frames per leg of the scripted drive.
const LEG_FRAMES: u64 = 120;

struct Options {
    config: Option<PathBuf>,
    ticks: u64,
    json: bool,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        print_usage();
        return;
    }

    init_tracing();

    if let Err(e) = run(&args) {
        tracing::error!(error = %format!("{e:#}"), "range-runner failed");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "range-runner: headless tank range session\n\
         \n\
           --config <path>  Range config TOML (optional, default: built-in tuning)\n\
           --ticks <N>      Frames to simulate (default: {DEFAULT_TICKS})\n\
           --json           Print the final snapshot as JSON on stdout\n\
         \n\
         Log filtering follows RUST_LOG; set LOG_FORMAT=json for JSON logs.\n"
    );
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr so --json output stays machine-readable.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut options = Options {
        config: None,
        ticks: DEFAULT_TICKS,
        json: false,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--ticks" => {
                let value = iter.next().context("--ticks needs a number")?;
                options.ticks = value
                    .parse()
                    .with_context(|| format!("invalid tick count: {value}"))?;
            }
            "--json" => options.json = true,
            other => bail!("unknown argument: {other}"),
        }
    }

    Ok(options)
}

fn run(args: &[String]) -> Result<()> {
    let options = parse_options(args)?;

    let config = match &options.config {
        Some(path) => RangeConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RangeConfig::default(),
    };
    let frames_per_second = (1.0 / config.frame_dt).round().max(1.0) as u64;

    let mut engine = SimulationEngine::new(config);
    engine.queue_command(SessionCommand::StartSession);

    let mut last = engine.tick();
    for frame in 1..=options.ticks {
        engine.queue_commands(scripted_commands(frame));
        last = engine.tick();

        if frame % frames_per_second == 0 {
            log_summary(&last);
        }
        if last.score.targets_remaining == 0 && last.score.targets_spawned > 0 {
            tracing::info!(frame, "all targets destroyed");
            break;
        }
    }

    tracing::info!(
        shots = last.score.shots_fired,
        destroyed = last.score.targets_destroyed,
        remaining = last.score.targets_remaining,
        elapsed_secs = last.time.elapsed_secs,
        "session finished"
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&last)?);
    }
    Ok(())
}

/// Drive in a weaving pattern, sweep the turret, and fire periodically.
fn scripted_commands(frame: u64) -> Vec<SessionCommand> {
    let leg = frame / LEG_FRAMES;
    let turn = match leg % 4 {
        0 | 2 => 0.0,
        1 => 0.6,
        _ => -0.6,
    };
    let sweep = if (frame / (2 * LEG_FRAMES)) % 2 == 0 { 0.5 } else { -0.5 };

    let mut commands = Vec::new();
    if frame % LEG_FRAMES == 1 {
        commands.push(SessionCommand::SetForwardInput { value: 0.7 });
        commands.push(SessionCommand::SetTurnInput { value: turn });
        commands.push(SessionCommand::SetAimInput { turn: sweep, up: 0.0 });
    }
    if frame % FIRE_INTERVAL == 0 {
        commands.push(SessionCommand::Fire);
    }
    commands
}

fn log_summary(snapshot: &RangeSnapshot) {
    let Some(tank) = &snapshot.tank else {
        return;
    };
    tracing::info!(
        t = %format!("{:.1}", snapshot.time.elapsed_secs),
        speed = %format!("{:.2}", tank.current_speed),
        heading = %format!("{:.1}", tank.heading),
        aim = ?snapshot.aim.as_ref().map(|a| a.horizontal_angle),
        bullets = snapshot.bullets.len(),
        targets = snapshot.score.targets_remaining,
        "range status"
    );
}
