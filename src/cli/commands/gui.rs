use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SessionLogStore;
use crate::utils::path::resolve_log_file;

/// Handle the `gui` command (also the default when no command is given)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SessionLogStore::open(resolve_log_file(&cfg.log_file))?;
    open_window(store, cfg)
}

#[cfg(feature = "gui")]
fn open_window(store: SessionLogStore, cfg: &Config) -> AppResult<()> {
    use crate::core::{Controller, LocalClock};

    let controller = Controller::new(store, LocalClock);
    crate::ui::window::run(controller, cfg)
}

#[cfg(not(feature = "gui"))]
fn open_window(_store: SessionLogStore, _cfg: &Config) -> AppResult<()> {
    Err(crate::errors::AppError::Gui(
        "this build has no window support (enable the `gui` feature)".to_string(),
    ))
}
