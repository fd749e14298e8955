//! HMD Metrics - inspect the headset configuration resolved from persisted
//! device properties.

use anyhow::Result;
use clap::{Parser, Subcommand};

use hmdmetrics::cli::{PropertiesArgs, ShowArgs};
use hmdmetrics::constants::APP_NAME;

/// Inspect head-mount and display metrics resolved from persisted properties
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Display the resolved head-mount and display metrics
    Show(ShowArgs),
    /// List the recognized property keys and their effective values
    Properties(PropertiesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Show(args) => args.execute(),
        Command::Properties(args) => args.execute(),
    }
    .map_err(|e| e.context(format!("{APP_NAME} failed")))
}
