use clap::Parser;
use std::path::PathBuf;
use thousand_sunny::commands::{self, Command, Format, Outcome};
use thousand_sunny::location::LocationResolver;
use thousand_sunny::settings::{ProviderKind, Settings};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

/// Thousand Sunny — ship systems console
///
/// Launches dock vehicles, fires cannons, and sails the ship by nudging its
/// latitude in degrees/minutes/seconds.
///
/// Examples:
///   sunny locate
///   sunny north 25
///   sunny --provider ip --json south 111
///   sunny convert -- -33.8688
///   sunny dock 2
///   sunny fire coup-de-burst
#[derive(Parser)]
#[command(name = "sunny", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Extra configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Location provider: "fixed" (mock), "ip", or "unavailable".
    #[arg(long, global = true)]
    provider: Option<ProviderKind>,

    /// Seconds to wait for a position fix.
    #[arg(long, global = true, value_parser = parse_timeout)]
    timeout: Option<f64>,

    /// Emit JSON reports on stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging on stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

fn parse_timeout(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(secs) if secs.is_finite() && secs > 0.0 => Ok(secs),
        _ => Err(format!("Invalid timeout '{}'. Use a positive number of seconds.", s)),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // ── Load settings ───────────────────────────────────────────

    let mut settings = Settings::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    if let Some(provider) = cli.provider {
        settings.location.provider = provider;
    }
    if let Some(secs) = cli.timeout {
        settings.location.timeout_secs = secs;
    }

    // ── Logging ─────────────────────────────────────────────────

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        settings.log.level.parse().unwrap_or(LevelFilter::WARN)
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
    debug!(?settings, "loaded settings");

    // ── Run ─────────────────────────────────────────────────────

    let resolver = LocationResolver::from_settings(&settings.location);
    let format = if cli.json { Format::Json } else { Format::Text };
    let mut stdout = std::io::stdout().lock();

    match commands::run(&cli.command, &resolver, format, &mut stdout).await {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::CoordinatesUnknown(_)) => {
            eprintln!("  Hint: check --provider / --timeout, or set location.permission_granted in the config.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
