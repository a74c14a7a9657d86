use std::time::Duration;

pub(crate) const DEFAULT_GAME_URL: &str = "https://chickenpotato.top/play/";

pub(crate) const GAME_URL_ENV: &str = "CHICKENFARM_GAME_URL";
pub(crate) const LOG_DIR_ENV: &str = "CHICKENFARM_LOG_DIR";

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const SHELL_LOG_FILE: &str = "desktop.log";

/// Per-request load budget; attempts still progressing past this are failed.
pub(crate) const LOAD_TIMEOUT: Duration = Duration::from_secs(12);

pub(crate) const CONNECTIVITY_POLL_INTERVAL: Duration = Duration::from_secs(3);
pub(crate) const CONNECTIVITY_PROBE_TIMEOUT_MS: u64 = 800;

/// Tauri event carrying the serialized load status to the overlay page.
pub(crate) const STATUS_EVENT: &str = "game-load-status";
