use std::thread;

use tauri::{AppHandle, Manager};
use url::Url;

use crate::{
    app_constants::MAIN_WINDOW_LABEL,
    logging::append_shell_log,
    ui_dispatch,
    webview_host::{LoadRequest, WebViewHost},
};

/// `WebViewHost` backed by the shell's main Tauri window. Loading navigates
/// the window to the game URL; lifecycle events come back through the
/// `on_page_load` hook and the injected progress probe.
pub(crate) struct GameWindowHost {
    app_handle: AppHandle,
}

impl GameWindowHost {
    pub(crate) fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl WebViewHost for GameWindowHost {
    fn load(&self, request: &LoadRequest) -> Result<(), String> {
        let mut window = self
            .app_handle
            .get_webview_window(MAIN_WINDOW_LABEL)
            .ok_or_else(|| "main window not found".to_string())?;

        window
            .navigate(request.url.clone())
            .map_err(|error| format!("failed to navigate to the game: {error}"))?;

        // Tauri has no per-navigation timeout, so arm one ourselves. The
        // controller drops the event if the attempt already settled.
        let app_handle = self.app_handle.clone();
        let attempt = request.attempt;
        let timeout = request.timeout;
        thread::spawn(move || {
            thread::sleep(timeout);
            ui_dispatch::with_controller(&app_handle, move |controller| {
                controller.handle_load_timeout(attempt);
            });
        });

        Ok(())
    }
}

/// Brings the local shell page back so it can render the failure or
/// offline banner over the brand background.
pub(crate) fn show_overlay(app_handle: &AppHandle) {
    let Some(mut window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        append_shell_log("show_overlay skipped: main window not found");
        return;
    };
    let overlay = match overlay_url() {
        Ok(url) => url,
        Err(error) => {
            append_shell_log(&format!("failed to resolve overlay URL: {error}"));
            return;
        }
    };
    if let Err(error) = window.navigate(overlay) {
        append_shell_log(&format!("failed to navigate back to the overlay: {error}"));
    }
}

/// Origin of the embedded `dist/` page served over the custom protocol.
fn overlay_url() -> Result<Url, String> {
    #[cfg(windows)]
    const SHELL_ORIGIN: &str = "http://tauri.localhost/";
    #[cfg(not(windows))]
    const SHELL_ORIGIN: &str = "tauri://localhost/";

    Url::parse(SHELL_ORIGIN).map_err(|error| format!("invalid shell origin: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_url_points_at_the_embedded_shell_origin() {
        let url = overlay_url().expect("overlay url");
        assert_eq!(url.host_str(), Some("localhost"));
    }
}
