use std::process::ExitCode;

use tether_chess::{cli, ShareMode};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let mut mode = ShareMode::Linear;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--quantum" => mode = ShareMode::Quantum,
            "--linear" => mode = ShareMode::Linear,
            other => {
                eprintln!("unknown argument '{other}' (expected --linear or --quantum)");
                return ExitCode::FAILURE;
            }
        }
    }

    match cli::run_stdio(mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
