//! gemfall: run the gem spawner headless.
//!
//! Usage:
//!   gemfall run --config gems.json --seconds 30
//!   gemfall simulate --seed 7 --seconds 100 > spawns.jsonl

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use log::{error, info};

use gemfall_app::control;
use gemfall_app::error::AppError;
use gemfall_app::state::AppState;
use gemfall_core::config::SpawnerConfig;
use gemfall_core::constants::{DEFAULT_SEED, TICK_RATE};
use gemfall_core::state::{GemView, SpawnerSnapshot};
use gemfall_sim::engine::{SimConfig, SimulationEngine};

/// Simulated seconds when `--seconds` is omitted.
const DEFAULT_SECONDS: f64 = 30.0;

struct Options {
    config: Option<PathBuf>,
    seed: u64,
    seconds: f64,
    duration: Duration,
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => cmd_run(&parse_options(&args[2..])),
        "simulate" => cmd_simulate(&parse_options(&args[2..])),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

fn init_logging() {
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();
}

fn print_usage() {
    eprintln!(
        "gemfall: headless gem spawner\n\
         \n\
         Commands:\n\
         \n\
         run       Run the spawner in real time\n\
         simulate  Fast-forward and print each spawn as a JSON line\n\
         \n\
         Options:\n\
         \n\
           --config <path>    Spawner config JSON (optional, default: reference spawner)\n\
           --seed <N>         RNG seed (default: {DEFAULT_SEED})\n\
           --seconds <S>      Seconds to run (default: {DEFAULT_SECONDS})\n\
         \n\
         Logging is controlled by RUST_LOG (default: info).\n"
    );
}

fn parse_options(args: &[String]) -> Options {
    let mut opts = Options {
        config: None,
        seed: DEFAULT_SEED,
        seconds: DEFAULT_SECONDS,
        duration: Duration::from_secs_f64(DEFAULT_SECONDS),
    };

    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--config", Some(v)) => opts.config = Some(PathBuf::from(v)),
            ("--seed", Some(v)) => opts.seed = parse_arg("--seed", v),
            ("--seconds", Some(v)) => match parse_seconds(v) {
                Ok((seconds, duration)) => {
                    opts.seconds = seconds;
                    opts.duration = duration;
                }
                Err(message) => usage_error(&message),
            },
            (flag, None) if flag.starts_with("--") => {
                usage_error(&format!("{flag} needs a value"));
            }
            (other, _) => usage_error(&format!("Unknown argument: {other}")),
        }
        i += 2;
    }

    opts
}

fn parse_arg<T: std::str::FromStr>(flag: &str, value: &str) -> T {
    match value.parse() {
        Ok(v) => v,
        Err(_) => usage_error(&format!("Invalid value for {flag}: {value}")),
    }
}

/// Parse `--seconds` into simulated seconds and a wall-clock duration.
fn parse_seconds(value: &str) -> Result<(f64, Duration), String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("Invalid value for --seconds: {value}"))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("--seconds must be non-negative, got {value}"));
    }
    let duration = Duration::try_from_secs_f64(seconds)
        .map_err(|e| format!("--seconds {value} is out of range: {e}"))?;
    Ok((seconds, duration))
}

fn usage_error(message: &str) -> ! {
    eprintln!("Error: {message}");
    print_usage();
    process::exit(1);
}

fn build_engine(opts: &Options) -> Result<SimulationEngine, AppError> {
    let spawner = match &opts.config {
        Some(path) => {
            info!("loading spawner config from {}", path.display());
            SpawnerConfig::load(path)?
        }
        None => SpawnerConfig::default(),
    };

    Ok(SimulationEngine::new(SimConfig {
        seed: opts.seed,
        spawner,
    }))
}

fn cmd_run(opts: &Options) -> Result<(), AppError> {
    let engine = build_engine(opts)?;
    let state = AppState::new();

    control::start_simulation(&state, engine)?;
    std::thread::sleep(opts.duration);
    let snapshot = control::get_snapshot(&state)?;
    control::stop_simulation(&state)?;

    if let Some(snapshot) = snapshot {
        print_summary(&snapshot);
    }
    Ok(())
}

fn cmd_simulate(opts: &Options) -> Result<(), AppError> {
    let mut engine = build_engine(opts)?;
    engine.activate()?;

    let ticks = (opts.seconds * TICK_RATE as f64).round() as u64;
    let mut last = None;
    for _ in 0..ticks {
        let snapshot = engine.tick();
        for event in &snapshot.events {
            match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(e) => error!("failed to serialize spawn event: {e}"),
            }
        }
        last = Some(snapshot);
    }

    if let Some(snapshot) = last {
        print_summary(&snapshot);
        print_breakdown(&engine.gems());
    }
    Ok(())
}

fn print_summary(snapshot: &SpawnerSnapshot) {
    info!(
        "{:.2}s simulated, {} gem(s) worth {} point(s)",
        snapshot.time.elapsed_secs, snapshot.gem_count, snapshot.total_value
    );
    if let Some(spawner) = &snapshot.spawner {
        info!(
            "{} batch(es), spawner {:?}, next batch at tick {}",
            spawner.batches, spawner.phase, spawner.next_fire_tick
        );
    }
}

fn print_breakdown(gems: &[GemView]) {
    let mut by_template: BTreeMap<&str, usize> = BTreeMap::new();
    for gem in gems {
        *by_template.entry(gem.name.as_str()).or_default() += 1;
    }
    for (name, count) in by_template {
        info!("  {name}: {count}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds_accepts_plain_values() {
        assert_eq!(parse_seconds("2.5"), Ok((2.5, Duration::from_millis(2500))));
        assert_eq!(parse_seconds("0"), Ok((0.0, Duration::ZERO)));
    }

    #[test]
    fn test_parse_seconds_rejects_bad_values() {
        assert!(parse_seconds("-1").is_err());
        assert!(parse_seconds("NaN").is_err());
        assert!(parse_seconds("inf").is_err());
        assert!(parse_seconds("soon").is_err());
    }

    #[test]
    fn test_parse_seconds_rejects_unrepresentable_duration() {
        let err = parse_seconds("1e20").unwrap_err();
        assert!(err.contains("out of range"), "{err}");
    }
}
