use tauri::{AppHandle, Manager};

use crate::{
    load_status::LoadStatus, logging::append_shell_log, main_window::GameWindowHost, ui_dispatch,
    webview_host::WebViewHost, ShellBridgeResult, ShellState,
};

/// Snapshot for the overlay page; it fetches this on load before any event
/// arrives.
#[tauri::command]
pub(crate) fn shell_get_load_status(app_handle: AppHandle) -> LoadStatus {
    let state = app_handle.state::<ShellState>();
    let status = match state.controller.lock() {
        Ok(controller) => controller.status().clone(),
        Err(_) => {
            append_shell_log("load controller lock poisoned; reporting standby");
            LoadStatus::Standby
        }
    };
    status
}

/// Progress estimate from the injected game-page probe.
#[tauri::command]
pub(crate) fn shell_report_load_progress(
    app_handle: AppHandle,
    attempt: u64,
    progress: f64,
) -> ShellBridgeResult {
    if !(0.0..=1.0).contains(&progress) || !progress.is_finite() {
        return ShellBridgeResult::rejected(format!(
            "Progress must be a fraction in [0, 1], got {progress}."
        ));
    }

    ui_dispatch::with_controller(&app_handle, move |controller| {
        controller.handle_progress(attempt, progress);
    });
    ShellBridgeResult::ok()
}

/// Failure signal from the injected game-page probe.
#[tauri::command]
pub(crate) fn shell_report_load_failure(
    app_handle: AppHandle,
    attempt: u64,
    reason: String,
) -> ShellBridgeResult {
    let reason = reason.trim().to_string();
    if reason.is_empty() {
        return ShellBridgeResult::rejected("Missing failure reason.");
    }

    append_shell_log(&format!("game page reported failure: {reason}"));
    ui_dispatch::with_controller(&app_handle, move |controller| {
        controller.handle_navigation_failed(attempt, &reason);
    });
    ShellBridgeResult::ok()
}

/// The overlay's Retry control: an explicit re-attach, which is the only
/// way out of a failed attempt.
#[tauri::command]
pub(crate) fn shell_retry_load(app_handle: AppHandle) -> ShellBridgeResult {
    append_shell_log("retry requested from the overlay");
    attach_game_web_view(&app_handle);
    ShellBridgeResult::ok()
}

/// Hands the controller a factory producing main-window hosts and thereby
/// starts a fresh load.
pub(crate) fn attach_game_web_view(app_handle: &AppHandle) {
    let factory_handle = app_handle.clone();
    ui_dispatch::with_controller(app_handle, move |controller| {
        controller.attach_web_view(Box::new(move || {
            Box::new(GameWindowHost::new(factory_handle.clone())) as Box<dyn WebViewHost>
        }));
    });
}
