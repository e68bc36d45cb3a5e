use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use vehikular_registry::Register;
use vehikular_registry_cli::{demo, script, Listing};

/// Replays register operations and prints the vehicles and owners left over.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Log every change made to the register.
    #[arg(long)]
    debug: bool,
    /// JSON file with the operations to run. Runs the demo scenario if left out.
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let operations = match &args.script {
        Some(path) => {
            info!("Loading script from {}", path.display());
            script::load(path)?
        }
        None => {
            info!("No script given, running the demo scenario");
            demo::scenario()
        }
    };

    let mut register = Register::new();
    let statuses = script::run(&mut register, &operations);
    let applied = statuses.iter().filter(|status| **status == 1).count();
    info!(
        "Applied {applied} of {} operations. {} vehicles registered.",
        statuses.len(),
        register.len()
    );
    debug!("Statuses: {statuses:?}");

    println!("{}", serde_json::to_string_pretty(&Listing::of(&register))?);

    Ok(())
}
