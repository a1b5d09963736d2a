use super::load_config;
use clap::Subcommand;
use ghrel::core::path::config_file;
use ghrel::core::GhrelResult;
use std::process::ExitCode;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,
    /// Print the effective configuration (token masked)
    Show,
}

pub fn run(api_url: Option<String>, command: ConfigCommands) -> GhrelResult<ExitCode> {
    match command {
        ConfigCommands::Path => {
            let path = config_file()?;
            println!("{}", path.display());
            if !path.exists() {
                println!("  (not present, defaults in use)");
            }
        }
        ConfigCommands::Show => {
            let config = load_config(api_url)?;
            print!("{}", config.to_display_yaml()?);
        }
    }
    Ok(ExitCode::SUCCESS)
}
