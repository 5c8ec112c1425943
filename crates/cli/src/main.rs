//! LS-8 simulator CLI.
//!
//! Loads a program file, runs it to completion, and prints every `PRN` value
//! on stdout. Diagnostics (logs, trace lines, statistics) go to stderr.
//!
//! Exit codes: `0` on halt, `1` on an execution fault, `2` when the program
//! or configuration cannot be loaded.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ls8sim_core::Simulator;
use ls8sim_core::config::Config;
use ls8sim_core::soc::StdoutOutput;

/// Exit code for a fault raised while executing the program.
const EXIT_EXEC_FAULT: u8 = 1;

/// Exit code for a program or configuration that could not be loaded.
const EXIT_LOAD_FAULT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit computer simulator",
    long_about = "Run an LS-8 program: one 8-bit binary literal per line, `#` starts a comment.\n\nExamples:\n  ls8 programs/mult.ls8\n  ls8 programs/call.ls8 --trace --max-steps 10000"
)]
struct Cli {
    /// Program file to load at address 0.
    program: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a trace line to stderr before every instruction.
    #[arg(short, long)]
    trace: bool,

    /// Abort after this many instructions.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print execution statistics to stderr after the run.
    #[arg(long)]
    stats: bool,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => match Config::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("ls8: {e}");
                return ExitCode::from(EXIT_LOAD_FAULT);
            }
        },
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if cli.max_steps.is_some() {
        config.general.max_steps = cli.max_steps;
    }

    let mut sim = Simulator::new(&config);
    if let Err(e) = sim.load_file(&cli.program) {
        eprintln!("ls8: {e}");
        return ExitCode::from(EXIT_LOAD_FAULT);
    }

    match sim.run(&mut StdoutOutput) {
        Ok(summary) => {
            if cli.stats {
                summary.stats.print();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "execution aborted");
            eprintln!("ls8: {e}");
            eprintln!("{}", sim.cpu.trace_line());
            if cli.stats {
                sim.cpu.stats.print();
            }
            ExitCode::from(EXIT_EXEC_FAULT)
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
