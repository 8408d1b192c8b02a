use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod extract;
mod report;

pub use extract::{run_extract, ExtractConfig};
pub use report::RunSummary;

#[derive(Parser)]
#[command(name = "apns-extract")]
#[command(about = "Convert a carrier settings dump into apns-full-conf.xml", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding carrier_list.pb, others.pb and per-carrier *.pb files
    input: PathBuf,

    /// Output file (defaults to apns-full-conf.xml in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a JSON run summary on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, conflicts_with = "verbose")]
    quiet: bool,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = ExtractConfig {
        input_dir: cli.input,
        output_path: cli
            .output
            .unwrap_or_else(|| PathBuf::from(apns_writer::OUTPUT_FILE_NAME)),
    };

    let summary = run_extract(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        eprintln!("{}", summary.one_line());
    }
    Ok(())
}
