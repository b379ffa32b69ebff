mod cli;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use std::io;

use cli::commands::run;
use cli::console::Console;
use cli::opts::Cli;

fn main() -> Result<()> {
    // More than one positional argument exits here with usage and status 2.
    let args = Cli::parse();

    let env = env_logger::Env::default().default_filter_or(args.default_log_filter());
    env_logger::Builder::from_env(env).init();
    log::debug!("{args:?}");

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    run(args, &mut console, &mut rand::thread_rng())
}
