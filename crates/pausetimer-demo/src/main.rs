//! PauseTimer demo
//!
//! Runs a coarse and a precise timer side by side through a script of
//! restart/pause/unpause/cancel steps and sleeps, then prints where they
//! ended up.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use pausetimer_core::{ManualClock, PreciseTimer, Timer};
use pausetimer_demo::script::DEFAULT_SCRIPT;
use pausetimer_demo::{run, Report, Script};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pausetimer-demo")]
#[command(about = "Exercise the pausable timers with a scripted sequence", long_about = None)]
struct Args {
    /// Comma-separated steps: restart, pause, unpause, cancel, sleep:<millis>
    #[arg(short, long, default_value = DEFAULT_SCRIPT)]
    script: String,

    /// Advance a simulated clock instead of sleeping
    #[arg(long)]
    simulate: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("Invalid log level '{}'", args.log_level))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    let script: Script = args
        .script
        .parse()
        .with_context(|| format!("Failed to parse script '{}'", args.script))?;

    tracing::info!("Running script: {}", script);
    tracing::info!("Total sleep: {}ms", script.total_sleep().as_millis());

    let report = if args.simulate {
        tracing::info!("Using simulated clock");
        let clock = ManualClock::starting_at(Utc::now());
        let mut timer = Timer::with_clock(clock.clone());
        let mut precise = PreciseTimer::with_clock(clock.clone());
        run(&script, &mut timer, &mut precise, |d| clock.advance(d))
    } else {
        let mut timer = Timer::new();
        let mut precise = PreciseTimer::new();
        run(&script, &mut timer, &mut precise, std::thread::sleep)
    };

    print_report(&report, args.json)
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}
