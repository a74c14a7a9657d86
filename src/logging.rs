use std::{
    env, fs,
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::app_constants::{LOG_DIR_ENV, SHELL_LOG_FILE};

/// Where the shell log lives: `CHICKENFARM_LOG_DIR` when set, otherwise
/// `~/.chickenfarm/logs/`. `None` when neither can be resolved.
pub(crate) fn resolve_shell_log_path() -> Option<PathBuf> {
    if let Ok(dir) = env::var(LOG_DIR_ENV) {
        let dir = dir.trim();
        if !dir.is_empty() {
            return Some(PathBuf::from(dir).join(SHELL_LOG_FILE));
        }
    }

    home::home_dir().map(|home| home.join(".chickenfarm").join("logs").join(SHELL_LOG_FILE))
}

/// Appends one timestamped line to the shell log. Logging must never take
/// the shell down, so failures are swallowed.
pub(crate) fn append_shell_log(message: &str) {
    let Some(path) = resolve_shell_log_path() else {
        return;
    };
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let _ = append_log_line(&path, &format!("[{timestamp}] {message}"));
}

fn append_log_line(path: &Path, line: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}
