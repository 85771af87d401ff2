mod cli;
mod config;
mod main_lib;

use clap::Parser;
use cli::Cli;
use config::Config;
use main_lib::{init_tracing, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_data_path(cli.data.clone());
    init_tracing(&config.log_format);

    let output = run(&config, &cli)?;
    println!("{}", output);
    Ok(())
}
