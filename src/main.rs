mod cli;

use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands};
use groundwatch::config::Config;
use groundwatch::input::RequestDocument;
use groundwatch::{Analyzer, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config)?;
    let analyzer = Analyzer::new();

    match cli.command {
        Commands::Analyze { input, pretty } => {
            config.validate()?;

            let request =
                RequestDocument::load(&input)?.into_request(&config.analysis, Utc::now())?;
            let result = analyzer.analyze(&request);

            tracing::info!(
                score = result.availability.score,
                status = %result.availability.status,
                "Analysed {} readings",
                request.readings.len()
            );
            if result.availability.is_fallback() {
                tracing::warn!("Availability estimate is the neutral fallback");
            }

            let output = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", output);
        }
        Commands::Rules => {
            for (i, (id, name)) in analyzer.rules().list_rules().into_iter().enumerate() {
                println!("{}. {} ({})", i + 1, name, id);
            }
        }
        Commands::Check => {
            config.validate()?;
            println!("Configuration OK");
            println!("  recharge_factor: {}", config.analysis.recharge_factor);
            println!(
                "  default_extraction_rate_l_per_day: {}",
                config.analysis.default_extraction_rate_l_per_day
            );
            println!("  max_readings: {}", config.analysis.max_readings);
        }
    }

    Ok(())
}
