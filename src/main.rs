use std::path::PathBuf;

use antares_compare::compare;
use antares_compare::config::CompareConfig;
use antares_compare::console::render_summary;
use antares_compare::{CompareError, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(cli.verbose) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| CompareError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let (comparison, output) = compare::run(&config)?;

    println!("Comparison report written to {}", output.display());
    println!();
    print!("{}", render_summary(&comparison.table));
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compare Antares scenario workbooks against a reference scenario."
)]
struct Cli {
    /// Directory containing the scenario .xlsx files.
    #[arg(long, short = 'i')]
    input_dir: Option<PathBuf>,

    /// Report path (defaults to comparaison_scenarios_EPR.xlsx in the input directory).
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display name override, as FILE=LABEL. May be repeated.
    #[arg(long = "name", value_name = "FILE=LABEL")]
    names: Vec<String>,

    /// Reference scenario, by display name or file name.
    #[arg(long)]
    reference: Option<String>,

    /// Enable debug logging.
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<CompareConfig> {
        let mut config = match &self.config {
            Some(path) => CompareConfig::from_json_file(path)?,
            None => CompareConfig::default(),
        };

        if let Some(input_dir) = self.input_dir {
            config.input_dir = input_dir;
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        if let Some(reference) = self.reference {
            config.reference = Some(reference);
        }
        for name in &self.names {
            config.apply_name_override(name)?;
        }

        Ok(config)
    }
}
