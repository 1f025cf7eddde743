//! gridpull CLI - Hourly electricity load downloader for the EIA API.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use gridpull_lib::prelude::*;
use std::path::PathBuf;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "gridpull")]
#[command(about = "Hourly electricity load downloader for the EIA API", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Download hourly load data
    Download {
        /// Start date (YYYY-MM-DD or YYYY-MM-DDTHH)
        #[arg(short, long)]
        start: String,

        /// End date (YYYY-MM-DD or YYYY-MM-DDTHH). Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Path to the plain-text API key file
        #[arg(short = 'k', long, default_value = "secret_api.txt")]
        api_key_file: PathBuf,

        /// Output file path. Defaults to <respondent>_load.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "parquet")]
        format: Format,

        /// Respondent (balancing authority) code
        #[arg(short, long, default_value = "TVA")]
        respondent: String,

        /// Data series (demand, forecast, generation, interchange)
        #[arg(short = 't', long, default_value = "demand")]
        series: String,

        /// Maximum hours covered by a single request window
        #[arg(long, default_value_t = DEFAULT_MAX_SPAN_HOURS)]
        max_window_hours: i64,
    },

    /// Show the series a download would fetch
    Info {
        /// Respondent (balancing authority) code
        #[arg(short, long, default_value = "TVA")]
        respondent: String,

        /// Data series (demand, forecast, generation, interchange)
        #[arg(short = 't', long, default_value = "demand")]
        series: String,
    },

    /// Show the window plan for a range without fetching anything
    Plan {
        /// Start date (YYYY-MM-DD or YYYY-MM-DDTHH)
        #[arg(short, long)]
        start: String,

        /// End date (YYYY-MM-DD or YYYY-MM-DDTHH). Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Maximum hours covered by a single request window
        #[arg(long, default_value_t = DEFAULT_MAX_SPAN_HOURS)]
        max_window_hours: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Download {
            start,
            end,
            api_key_file,
            output,
            format,
            respondent,
            series,
            max_window_hours,
        } => {
            commands::download::download(
                &start,
                end.as_deref(),
                &api_key_file,
                output,
                format,
                &respondent,
                &series,
                max_window_hours,
                cli.quiet,
            )
            .await
        }
        Commands::Info { respondent, series } => commands::info::show_info(&respondent, &series),
        Commands::Plan {
            start,
            end,
            max_window_hours,
        } => commands::plan::show_plan(&start, end.as_deref(), max_window_hours),
    }
}
