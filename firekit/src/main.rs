mod commands;
mod logger;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet, cli.no_color);
    cli.run()
}
