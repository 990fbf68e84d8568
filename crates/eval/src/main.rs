//! # objective-eval
//!
//! Reads a proposed point from a parameter file, evaluates a benchmark
//! surface there, and writes the value where the optimizer expects it.
//!
//! ```sh
//! printf 'x_coord=0.5\ny_coord=1.0\n' > input.txt
//! objective-eval --surface bowl
//! cat data/output.dat
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::debug;

use objective_eval::{
    DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE, RunConfig, RunError, run,
};
use objective_surfaces::Surface;

#[derive(Parser, Debug)]
#[command(name = "objective-eval", version)]
#[command(about = "Evaluate a benchmark surface at the point given in a parameter file")]
struct Cli {
    /// Parameter file providing `x_coord` and `y_coord`
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Surface to evaluate (see --list-surfaces)
    #[arg(short, long, default_value_t = Surface::default())]
    surface: Surface,

    /// Directory that receives the output file, created if absent
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Name of the output file inside the output directory
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output_file: PathBuf,

    /// Print the available surfaces and exit
    #[arg(long)]
    list_surfaces: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output_dir: cli.output_dir,
            output_file: cli.output_file,
            surface: cli.surface,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("{cli:?}");

    if cli.list_surfaces {
        for surface in Surface::ALL {
            let modality = if surface.is_multimodal() {
                "multimodal"
            } else {
                "unimodal"
            };
            println!("{:<20} {:<11} {}", surface.name(), modality, surface.description());
        }
        return ExitCode::SUCCESS;
    }

    match run(&RunConfig::from(cli)) {
        Ok(evaluation) => {
            println!("val = {}", evaluation.value());
            println!("Value written to {}", evaluation.output_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Prints the error and its chain of causes to stderr.
fn report(err: &RunError) {
    eprintln!("error: {err}");

    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
