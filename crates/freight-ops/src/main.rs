use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use freight_ops::models::FreightConfig;

const DEFAULT_CONFIG_PATH: &str = "config/freight.toml";

#[derive(Parser, Debug)]
#[command(
    name = "freight-ops",
    about = "Validate freight loads and screen them against rate-per-mile and deadhead thresholds"
)]
struct Cli {
    /// Path to business configuration file [default: config/freight.toml]
    #[arg(short, long)]
    config: Option<String>,

    /// Read load JSON (one object or an array) from a file instead of stdin
    #[arg(short, long)]
    input: Option<String>,

    /// Only print loads that pass the profitability check
    #[arg(long)]
    profitable_only: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    log_json: bool,
}

fn resolve_config(explicit: Option<&str>) -> Result<FreightConfig> {
    if let Some(path) = explicit {
        return freight_ops::load_config(path)
            .with_context(|| format!("Failed to load config: {path}"));
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return freight_ops::load_config(DEFAULT_CONFIG_PATH)
            .with_context(|| format!("Failed to load config: {DEFAULT_CONFIG_PATH}"));
    }
    tracing::warn!(
        path = DEFAULT_CONFIG_PATH,
        "Config file not found, using default rate thresholds"
    );
    Ok(FreightConfig::default())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    freight_ops::init_logging(cli.log_json).context("Failed to initialize logging")?;

    let config = resolve_config(cli.config.as_deref())?;

    let loads_json = if let Some(input_path) = &cli.input {
        std::fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read input: {input_path}"))?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        buf
    };

    let loads = freight_ops::parse_loads(&loads_json).context("Failed to parse loads")?;

    let mut evaluations = freight_ops::evaluate_batch(&loads, &config);
    if cli.profitable_only {
        evaluations.retain(|e| e.profitable);
    }

    // Output evaluations as JSON to stdout
    let output = if cli.pretty {
        serde_json::to_string_pretty(&evaluations)?
    } else {
        serde_json::to_string(&evaluations)?
    };
    println!("{output}");

    Ok(())
}
