use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::FilterPreset;
use crate::ui::{Console, LineReader, StreamReader, TerminalReader};
use std::io::{self, IsTerminal};

/// Handle the `explore` command (also the default without a subcommand)
pub fn handle(preset: FilterPreset, cfg: &Config) -> AppResult<()> {
    if io::stdin().is_terminal() {
        run_with(TerminalReader::new()?, preset, cfg)
    } else {
        tracing::debug!("stdin is not a terminal, reading answers line by line");
        run_with(StreamReader::new(io::stdin().lock()), preset, cfg)
    }
}

fn run_with<R: LineReader>(reader: R, preset: FilterPreset, cfg: &Config) -> AppResult<()> {
    let console = Console::new(reader, io::stdout());
    let mut session = Session::new(console, cfg, preset);
    session.run()?;
    tracing::info!("session finished after {} cycle(s)", session.cycles());
    Ok(())
}
