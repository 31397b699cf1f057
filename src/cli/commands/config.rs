use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::io;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        let path = Config::config_file();
        let mut out = io::stdout();

        // ---- INIT CONFIG ----
        if *init {
            if Config::init_at(&path)? {
                success(&mut out, format!("Config file created: {}", path.display()))?;
            } else {
                info(&mut out, format!("Config file already exists: {}", path.display()))?;
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config || !*init {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }
    }

    Ok(())
}
