// src/main.rs
use clap::Parser;
use origen_version::{app, cli::Args, version};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let descriptor = version::current();

    match app::run(&args, descriptor) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
