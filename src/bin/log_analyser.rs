use std::io;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

use trafficscope::config::Config;
use trafficscope::runner::{self, RunStatus};

/// Configuration file picked up from the working directory when present
const IMPLICIT_CONFIG: &str = "trafficscope.toml";

/// Access log traffic analyser
#[derive(StructOpt, Debug)]
#[structopt(name = "log_analyser", about = "Rank request volume per IP and flag suspicious clients")]
pub struct Cli {
    /// Path to configuration file
    #[structopt(short, long)]
    config: Option<PathBuf>,

    #[structopt(subcommand)]
    command: Option<Command>,
}

#[derive(StructOpt, Debug)]
pub enum Command {
    /// Analyse a log file and print the traffic report (default)
    Analyze {
        /// Path to log file
        #[structopt(short, long)]
        file: Option<PathBuf>,
        /// Number of IPs in the top list
        #[structopt(short, long)]
        top: Option<usize>,
        /// Output format: "console" or "json"
        #[structopt(long)]
        format: Option<String>,
        /// Write the report to a file instead of stdout
        #[structopt(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a default configuration file
    Config {
        /// Output path for the configuration file
        #[structopt(short, long, default_value = "trafficscope.toml")]
        output: PathBuf,
    },
    /// Parse and display log records from a file
    Parse {
        /// Path to log file
        #[structopt(short, long)]
        file: PathBuf,
        /// Number of records to show
        #[structopt(short, long, default_value = "10")]
        lines: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::from_args();
    let command = cli.command.unwrap_or(Command::Analyze {
        file: None,
        top: None,
        format: None,
        output: None,
    });

    let status = match command {
        Command::Analyze { file, top, format, output } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(file) = file {
                config.input.log_file_path = file;
            }
            if let Some(top) = top {
                config.report.top_n = top;
            }
            if let Some(format) = format {
                config.report.format = format;
            }
            if output.is_some() {
                config.report.file_path = output;
            }
            runner::run_analysis(&config, &mut io::stdout())?
        }
        Command::Config { output } => {
            let config = Config::default();
            config.to_file(&output)?;
            println!("Default configuration written to: {:?}", output);
            RunStatus::Completed
        }
        Command::Parse { file, lines } => runner::show_records(&file, lines, &mut io::stdout())?,
    };

    if status == RunStatus::Unreadable {
        std::process::exit(1);
    }

    Ok(())
}

/// Load an explicit config file, else the implicit one if present, else defaults
fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::from_file(path)?),
        None => {
            let implicit = Path::new(IMPLICIT_CONFIG);
            if implicit.exists() {
                log::info!("Using configuration file {:?}", implicit);
                Ok(Config::from_file(implicit)?)
            } else {
                Ok(Config::default())
            }
        }
    }
}
