use clap::Parser;
use std::process::ExitCode;

mod api;
mod cli;
mod commands;
mod domain;
mod services;

fn main() -> anyhow::Result<ExitCode> {
    // Diagnostics go to stderr; stdout is reserved for the report stream.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init();
    let cli = cli::Cli::parse();
    commands::analyze::handle_analyze(&cli)
}
