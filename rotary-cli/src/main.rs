//! Rotary Phone Simulator CLI
//!
//! Runs a scripted demonstration of the rotary phone: digit-by-digit
//! dialing, whole-number dialing, error handling, an optional interactive
//! number, and the resulting call history.

mod demo;
mod settings;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rotary_dial::Phone;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use demo::{run_demo, DemoOptions};
use settings::Settings;

/// Legendary Rotary Phone - simulate a mechanical rotary telephone
#[derive(Parser, Debug)]
#[command(name = "rotary-phone")]
#[command(about = "Simulate a mechanical rotary telephone", long_about = None)]
#[command(version)]
struct Args {
    /// Settings file (JSON); defaults to the user config directory
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Record delays on a virtual clock instead of sleeping
    #[arg(long)]
    fast: bool,

    /// Number to dial at the end of the demo instead of prompting
    #[arg(short, long, value_name = "NUMBER")]
    number: Option<String>,

    /// Never prompt for input
    #[arg(long)]
    no_interactive: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_config: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("rotary_phone={level},rotary_dial={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    tracing::info!("Rotary phone simulator v{}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load(args.config.as_deref())?;
    if args.save_config {
        let path = settings.save(args.config.as_deref())?;
        tracing::info!("Settings saved to {}", path.display());
    }

    let options = DemoOptions {
        script: settings.demo.clone(),
        interactive: settings.interactive && !args.no_interactive,
        number: args.number,
    };

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    if args.fast {
        let mut phone = Phone::simulated(settings.phone);
        run_demo(&mut phone, &options, &mut input, &mut out)?;
        tracing::info!(
            "Simulated {:.1}s of dialing and calls",
            phone.waiter().elapsed().as_secs_f64()
        );
        tracing::info!("Final state: {}", phone.status().summary());
    } else {
        let mut phone = Phone::with_config(settings.phone);
        run_demo(&mut phone, &options, &mut input, &mut out)?;
        tracing::info!("Final state: {}", phone.status().summary());
    }

    Ok(())
}
