//! Triptych CLI - Turn extracted triplets into knowledge graph diagrams

mod cli;
mod table;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let mut app = cli::TriptychApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
