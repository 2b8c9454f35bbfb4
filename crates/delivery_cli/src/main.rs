//! Command-line front end over the delivery core.
//!
//! # Responsibility
//! - Verify `delivery_core` wiring independently from any UI.
//! - Run dashboard/history/submit flows over the sample store and print JSON.

use anyhow::Context;
use clap::{Parser, Subcommand};
use delivery_core::{
    classify_code, init_from_config, result_count_label, sample_deliveries, CoreConfig,
    DeliveryFilter, DeliveryService, DeliverySubmission, InMemoryDeliveryRepository,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "delivery", about = "Inspect delivery dashboard and history", version)]
struct Cli {
    /// TOML config file (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print core health and version
    Ping,

    /// Show counters and recent deliveries
    Dashboard {
        /// Override `recent_limit` from config
        #[arg(long)]
        recent: Option<usize>,
    },

    /// List deliveries matching the given filters
    History {
        /// Recipient or origin substring
        #[arg(long, default_value = "")]
        search: String,
        /// all|pending|delivered|delayed
        #[arg(long, default_value = "all")]
        status: String,
        /// Expected date, YYYY-MM-DD
        #[arg(long, default_value = "")]
        date: String,
    },

    /// Show the badge for a raw status code
    Classify { code: String },

    /// Validate and register a delivery in the sample store
    Submit {
        #[arg(long)]
        recipient: String,
        #[arg(long)]
        origin: String,
        /// Expected date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[arg(long, default_value = "pending")]
        status: String,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Ping => "ping",
            Self::Dashboard { .. } => "dashboard",
            Self::History { .. } => "history",
            Self::Classify { .. } => "classify",
            Self::Submit { .. } => "submit",
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => CoreConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CoreConfig::default(),
    };
    init_from_config(&config).context("initializing logging")?;

    let repo = InMemoryDeliveryRepository::with_records(
        sample_deliveries().context("building sample deliveries")?,
    )?;
    let service = DeliveryService::new(repo);
    log::info!(
        "event=cli_command module=cli status=start command={}",
        cli.command.name()
    );

    match cli.command {
        Commands::Ping => {
            println!("delivery_core ping={}", delivery_core::ping());
            println!("delivery_core version={}", delivery_core::core_version());
        }
        Commands::Dashboard { recent } => {
            let dashboard = service.dashboard(recent.unwrap_or(config.recent_limit))?;
            print_json(&dashboard)?;
        }
        Commands::History {
            search,
            status,
            date,
        } => {
            let criteria = DeliveryFilter::from_raw(search, &status, &date);
            let records = service.history(&criteria)?;
            if criteria.is_active() {
                eprintln!("{}", result_count_label(records.len()));
            }
            print_json(&records)?;
        }
        Commands::Classify { code } => print_json(&classify_code(&code))?,
        Commands::Submit {
            recipient,
            origin,
            date,
            status,
            time,
            notes,
        } => {
            let submission = DeliverySubmission {
                recipient,
                origin,
                expected_date: date,
                status,
                time,
                notes,
            };
            let record = service.submit(&submission)?;
            print_json(&record)?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
