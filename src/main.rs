//! Enigma command-line front end.
//!
//! # Usage
//!
//! ```bash
//! # Encrypt with explicit settings
//! enigma --positions "5 10 15" --rings "1 2 3" --plugboard "AB CD" HELLOWORLD
//!
//! # Decrypt by feeding the ciphertext through the same settings
//! echo KAZKQTIWPX | enigma --positions "5 10 15" --rings "1 2 3" --plugboard "AB CD"
//!
//! # Load settings from a JSON file; flags override individual fields
//! enigma --config key.json --positions "0 0 0" "ATTACK AT DAWN"
//! ```

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use enigma::config::{parse_plugboard, parse_rotor_choices, parse_settings};
use enigma::{Machine, MachineConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Three-rotor Enigma cipher
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Encrypt or decrypt a message with a three-rotor Enigma machine")]
#[command(version)]
struct Args {
    /// Message to process (read from stdin when omitted)
    message: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rotor choices, left to right (e.g. "0 1 2")
    #[arg(long)]
    rotors: Option<String>,

    /// Starting positions, left to right (e.g. "0 0 0")
    #[arg(short, long)]
    positions: Option<String>,

    /// Ring settings, left to right (e.g. "0 0 0")
    #[arg(short, long)]
    rings: Option<String>,

    /// Plugboard pairs (e.g. "AB CD")
    #[arg(short = 'b', long)]
    plugboard: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = build_config(&args)?;
    let mut machine = Machine::new(&config).context("invalid machine configuration")?;

    let message = match args.message {
        Some(message) => message,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read message from stdin")?;
            buffer.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    tracing::info!(chars = message.chars().count(), "processing message");
    let output = machine.process(&message);
    tracing::info!(window = %machine.window(), "final rotor window");

    println!("{}", output);
    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<MachineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            MachineConfig::from_json_str(&json)?
        }
        None => MachineConfig::default(),
    };

    if let Some(text) = &args.rotors {
        config.rotors = parse_rotor_choices(text)?;
    }
    if let Some(text) = &args.positions {
        config.positions = parse_settings("positions", text)?;
    }
    if let Some(text) = &args.rings {
        config.ring_settings = parse_settings("ring_settings", text)?;
    }
    if let Some(text) = &args.plugboard {
        config.plugboard = parse_plugboard(text)?;
    }
    Ok(config)
}
