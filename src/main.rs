use clap::Parser;
use lc3_vm::emulator::Emulator;
use lc3_vm::terminal::{self, ConsoleOutput, TerminalInputProvider};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Runs LC-3 program images until they halt, press Escape or CTRL-C to stop early.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Program images to load, later images overwrite earlier ones where they overlap
    #[arg(required = true)]
    images: Vec<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set, e.g. `debug` or `lc3_vm=info`
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut emu = Emulator::new(
        Box::new(TerminalInputProvider::new()),
        ConsoleOutput::new(io::stdout()),
    );
    for path in &cli.images {
        if let Err(e) = emu.load_program(path) {
            tracing::error!(path = %path.display(), "failed to load program image");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }
    let res = {
        let _lock = terminal::set_terminal_raw();
        emu.execute()
    };
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
