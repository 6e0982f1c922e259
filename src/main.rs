use colored::Colorize;
use std::process::ExitCode;

mod commands;
mod config;
mod core;
mod error;
mod farewell;
mod logger;
mod shell;

use config::ShellConfig;
use shell::Shell;

fn main() -> ExitCode {
    let config = ShellConfig::default();
    if let Err(e) = logger::init(config.log_level) {
        eprintln!("cell: logger unavailable: {}", e);
    }

    let result = Shell::new(config).and_then(|mut shell| shell.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::from(e.exit_code())
        }
    }
}
