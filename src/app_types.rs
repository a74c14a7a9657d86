use std::sync::Mutex;

use url::Url;

use crate::load_controller::WebLoadController;

/// Tauri-managed state. The mutex only serializes access for readers; all
/// mutation goes through `ui_dispatch::with_controller`.
pub(crate) struct ShellState {
    pub(crate) controller: Mutex<WebLoadController>,
}

impl ShellState {
    pub(crate) fn new(game_url: Url) -> Self {
        Self {
            controller: Mutex::new(WebLoadController::new(game_url)),
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct ShellBridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl ShellBridgeResult {
    pub(crate) fn ok() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub(crate) fn rejected(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}
