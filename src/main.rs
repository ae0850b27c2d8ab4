//! Chart Maker - fruit emoji annotation and chart data from the command line
//!
//! This is the binary entry point. All logic lives in the library.

use std::io::BufRead;
use std::path::PathBuf;

use chartmaker::cli::{annotate_lines, build_chart, fruit_lines, parse_row};
use chartmaker::headless::HeadlessEvent;
use chartmaker_app::config::{init_config_dir, load_settings};
use chartmaker_core::ChartType;
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing::{error, info};

/// Chart Maker - fruit emoji annotation and chart data from the command line
#[derive(Parser, Debug)]
#[command(name = "chartmaker")]
#[command(about = "Annotate fruit names with emojis and build chart data", long_about = None)]
struct Args {
    /// Directory holding `.chartmaker/config.toml` (defaults to the current directory)
    #[arg(long, value_name = "DIR", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append fruit emojis to each TEXT (or each stdin line when none is given)
    Annotate {
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Exit 0 if TEXT has fruit names that would be annotated, 1 otherwise
    Check {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// List the fruit table
    Fruits,

    /// Build a chart from TITLE=VALUE rows and print it as NDJSON events
    Chart {
        #[arg(long = "row", value_name = "TITLE=VALUE")]
        rows: Vec<String>,

        /// bar, line or pie (defaults to the configured type)
        #[arg(long = "type", value_name = "TYPE")]
        chart_type: Option<ChartType>,
    },

    /// Create `.chartmaker/config.toml` with defaults
    Init,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    chartmaker_core::logging::init()?;

    let project_dir = args
        .config
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let settings = load_settings(&project_dir);

    match args.command {
        Command::Annotate { text } => {
            let annotator = settings.build_annotator()?;
            let inputs = if text.is_empty() {
                std::io::stdin().lock().lines().collect::<std::io::Result<Vec<_>>>()?
            } else {
                text
            };
            for line in annotate_lines(&annotator, inputs.iter().map(String::as_str)) {
                println!("{}", line);
            }
        }

        Command::Check { text } => {
            let annotator = settings.build_annotator()?;
            let found = annotator.contains_enhanceable(&text);
            println!("{}", found);
            if !found {
                std::process::exit(1);
            }
        }

        Command::Fruits => {
            let annotator = settings.build_annotator()?;
            for line in fruit_lines(&annotator) {
                println!("{}", line);
            }
        }

        Command::Chart { rows, chart_type } => {
            let parsed = match rows.iter().map(|r| parse_row(r)).collect::<Result<Vec<_>, _>>() {
                Ok(parsed) => parsed,
                Err(e) => {
                    error!("{}", e);
                    HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
                    std::process::exit(1);
                }
            };

            let (_, events) = build_chart(&settings, &parsed, chart_type)?;
            for event in &events {
                event.emit();
            }
        }

        Command::Init => {
            init_config_dir(&project_dir)?;
            info!("Initialized config in {}", project_dir.display());
            eprintln!(
                "✅ Config ready: {}",
                project_dir.join(".chartmaker").join("config.toml").display()
            );
        }
    }

    Ok(())
}
