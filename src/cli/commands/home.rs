use crate::cli::commands::checkin::run_flow;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::Entry;
use crate::errors::AppResult;

/// Handle the `home` command: home screen, then the location screen.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Home(args) = cmd {
        run_flow(args, cfg, Entry::Home).await?;
    }
    Ok(())
}
