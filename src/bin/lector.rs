use std::process::ExitCode;

use clap::Parser;
use lector::cli::Lector;

#[tokio::main]
async fn main() -> ExitCode {
    Lector::parse().run().await
}
