use std::process::ExitCode;

mod app;
mod artwork;
mod audio;
mod commands;
mod config;
mod controls;
mod error;
mod library;
mod mpris;
mod navigation;
mod presets;
mod runtime;
mod ui;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pulseplay: {e}");
            ExitCode::FAILURE
        }
    }
}
