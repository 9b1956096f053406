mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logger::init_logger(args.verbose);

    let config = config::Config::init(args.config.as_deref())?;
    cli::run(&args, &config)
}
