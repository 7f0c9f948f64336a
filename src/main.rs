use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod dataset;
mod domain;
mod logging;
mod services;

pub use cli::*;
pub use commands::*;
pub use config::*;
pub use dataset::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::check::*;
pub use services::generator::*;
pub use services::inspect::*;
pub use services::interactions::*;
pub use services::output::*;
pub use services::prompt::*;
pub use services::resolver::*;
pub use services::side_effects::*;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let settings = load_settings(cli.config.as_deref(), cli.data_dir.as_deref())?;

    if handle_data_commands(&cli, &settings)? {
        return Ok(ExitCode::SUCCESS);
    }
    handle_lookup_commands(&cli, &settings)
}
