use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `init` command
///
/// Creates the config directory and a config file holding the defaults.
/// The session log itself is created on the first clock-out.
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing rClockInOut…");
    Config::init_all(cli.test)?;

    let cfg = Config::load()?;
    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Session log : {}", cfg.log_file));
    Ok(())
}
