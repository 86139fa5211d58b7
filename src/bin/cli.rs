// src/bin/cli.rs
use gh_insights::cli;

fn main() -> color_eyre::Result<()> {
    cli::run()
}
