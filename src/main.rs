use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pacetrack::config::{Config, DEFAULT_DATA_FILE};
use pacetrack::progress::{self, format_speed};
use pacetrack::store::{FileStore, RecordStore};
use pacetrack::validate::{validate, RawSubmission};

#[derive(Parser)]
#[command(
    name = "pacetrack",
    about = "Self-hosted marathon progress tracker",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server (tracker page + JSON API)
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long)]
        bind: Option<String>,

        /// Runner-history log file (overrides the config file)
        #[arg(long)]
        data: Option<PathBuf>,

        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Record one progress entry from the command line
    Track {
        /// Runner name
        #[arg(long)]
        name: String,

        /// Total distance (km)
        #[arg(long)]
        total: String,

        /// Distance covered so far (km)
        #[arg(long)]
        covered: String,

        /// Elapsed time (hours)
        #[arg(long)]
        elapsed: String,

        /// Target time (hours)
        #[arg(long)]
        target: String,

        /// Runner-history log file
        #[arg(long, default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,
    },

    /// Print the stored runner history
    History {
        /// Runner-history log file
        #[arg(long, default_value = DEFAULT_DATA_FILE)]
        data: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, data, config } => {
            let cfg = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            }
            .with_overrides(bind, data);

            tracing::info!(bind = %cfg.bind, "Starting pacetrack server");
            pacetrack::serve(&cfg.bind, &cfg.data_file).await?;
        }
        Commands::Track {
            name,
            total,
            covered,
            elapsed,
            target,
            data,
        } => {
            let raw = RawSubmission {
                runner_name: name,
                total_distance: total,
                distance_covered: covered,
                elapsed_time: elapsed,
                target_time: target,
            };
            match validate(&raw) {
                Ok(submission) => {
                    let record = progress::build_record(submission);
                    let store = FileStore::new(data);
                    store.append(&record)?;
                    println!("Recorded progress for {}.", record.runner_name);
                    println!("Current speed:  {}", format_speed(record.current_speed));
                    println!("Required speed: {}", format_speed(record.required_speed));
                }
                Err(err) => {
                    eprintln!("{err}");
                    std::process::exit(2);
                }
            }
        }
        Commands::History { data } => {
            let store = FileStore::new(data);
            let records = store.load_all()?;
            if records.is_empty() {
                println!("No historical data available yet.");
            } else {
                println!(
                    "{:<20} | {:>10} | {:>11} | {:>9} | {:>9} | {:>12} | {:>13}",
                    "Runner", "Total km", "Covered km", "Elapsed h", "Target h", "Current", "Required"
                );
                println!(
                    "{:-<20}-|-{:-<10}-|-{:-<11}-|-{:-<9}-|-{:-<9}-|-{:-<12}-|-{:-<13}",
                    "", "", "", "", "", "", ""
                );
                for r in &records {
                    println!(
                        "{:<20} | {:>10} | {:>11} | {:>9} | {:>9} | {:>12} | {:>13}",
                        r.runner_name,
                        r.total_distance,
                        r.distance_covered,
                        r.elapsed_time,
                        r.target_time,
                        format_speed(r.current_speed),
                        format_speed(r.required_speed)
                    );
                }
            }
        }
    }

    Ok(())
}
