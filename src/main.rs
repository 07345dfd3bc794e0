use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;

use c_mini_runner::config::RunnerConfig;
use c_mini_runner::driver::{run_with_config, RunOutcome};

#[derive(ClapParser, Debug)]
#[command(author, version, about = "Run a small C-subset program")]
struct Cli {
    /// Path to the `.c` source file to run.
    file: PathBuf,

    /// Path to a TOML config file (see `RunnerConfig`).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("failed to read {}: {err}", cli.file.display());
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run_with_config(&source, &config) {
        RunOutcome::Success { output, warnings, duration } => {
            print!("{output}");
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }
            log::info!("completed in {duration}s");
            ExitCode::SUCCESS
        }
        RunOutcome::Failure(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<RunnerConfig, String> {
    let Some(path) = path else {
        return Ok(RunnerConfig::default());
    };
    let text = fs::read_to_string(path).map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    RunnerConfig::from_toml(&text).map_err(|err| format!("invalid config at {}: {err}", path.display()))
}
