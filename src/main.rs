use anyhow::Context;
use bitrate_tier::config::{AppConfig, LoggingConfig, OutputFormat};
use bitrate_tier::utils::{LevelReport, TierReport, init_logging, tier_line};
use bitrate_tier::{BitrateLevel, Dimension, LADDER, classify_dimension};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "bitrate-tier")]
#[command(about = "Pick a target encoding bitrate tier for a video resolution")]
#[command(version)]
struct Args {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a width x height stream
    Classify {
        #[arg(allow_negative_numbers = true)]
        width: i64,

        #[arg(allow_negative_numbers = true)]
        height: i64,

        /// Print only this level's rate (low, mid, mid-high, high)
        #[arg(short, long)]
        level: Option<BitrateLevel>,

        /// Output format (text, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Print the whole resolution ladder
    Ladder {
        /// Output format (text, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration if no file exists yet
        #[arg(long)]
        init: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let loaded = AppConfig::load(args.config.as_deref());
    let log_level = loaded
        .as_ref()
        .map_or_else(|_| LoggingConfig::default().level, |c| c.logging.level.clone());
    let _guard = init_logging(&log_level);
    let config = AppConfig::or_defaults(loaded);

    match args.command {
        Commands::Classify {
            width,
            height,
            level,
            format,
        } => {
            let input = Dimension::from_signed(width, height)?;
            let tier = classify_dimension(input);
            debug!("{} classified as {}", input, tier.id);

            let format = format.unwrap_or(config.output.format);
            match level.or(config.output.level) {
                Some(level) => {
                    let report = LevelReport::new(input, tier, level);
                    match format {
                        OutputFormat::Text => println!("{}", report.text_line()),
                        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                    }
                }
                None => match format {
                    OutputFormat::Text => println!("{}", tier_line(tier)),
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&TierReport::from(tier))?)
                    }
                },
            }
        }

        Commands::Ladder { format } => match format.unwrap_or(config.output.format) {
            OutputFormat::Text => {
                for tier in &LADDER {
                    println!("{}", tier_line(tier));
                }
            }
            OutputFormat::Json => {
                let reports: Vec<TierReport> = LADDER.iter().map(TierReport::from).collect();
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        },

        Commands::Config { init } => {
            let path = args.config.unwrap_or_else(AppConfig::config_path);
            if init && !path.exists() {
                config
                    .save_to(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Wrote default config to {}", path.display());
            }
            println!("# {}", path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
