use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use growthspring::cli::{
    handle_export_command, handle_report_command, ExportArgs, ReportArgs,
};
use growthspring::config::{paths::ClubPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "growthspring",
    author = "GrowthSpring Engineering",
    version,
    about = "Terminal reporting tool for the GrowthSpring savings club",
    long_about = "Loads dashboard snapshots saved from the club API, filters \
                  the period-keyed records to a chronological range, and \
                  renders or exports the filtered report (terminal, XLSX \
                  workbook, paginated PDF, CSV)."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a filtered report in the terminal
    Report(ReportArgs),

    /// Export a filtered report to a file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            ),
        )
        .init();

    let cli = Cli::parse();

    let paths = ClubPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(&settings, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&settings, args)?;
        }
        Some(Commands::Config) => {
            println!("GrowthSpring CLI Configuration");
            println!("==============================");
            println!("Config directory:  {}", paths.base_dir().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Brand name:      {}", settings.brand_name);
            println!("  Date format:     {}", settings.date_format);
            println!("  Datetime format: {}", settings.datetime_format);
        }
        None => {
            println!("GrowthSpring - savings club reporting");
            println!();
            println!("Run 'growthspring --help' for usage information.");
            println!("Run 'growthspring report financial --snapshot <file>' to get started.");
        }
    }

    Ok(())
}
