//! Path utilities: expand ~ and resolve the log file location.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a configured log file. Relative paths stay relative so they are
/// looked up in the process working directory.
pub fn resolve_log_file(path: &str) -> PathBuf {
    let expanded = expand_tilde(path.trim());
    if expanded.as_os_str().is_empty() {
        return PathBuf::from(crate::store::DEFAULT_LOG_FILE);
    }
    expanded
}
