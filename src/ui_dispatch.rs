use tauri::{AppHandle, Manager};

use crate::{load_controller::WebLoadController, logging::append_shell_log, ShellState};

/// Marshals a controller mutation onto the main thread. Navigation
/// callbacks, the connectivity watcher and bridge commands all arrive on
/// arbitrary threads; funneling them through here keeps `WebLoadController`
/// single-writer with a stable event order.
pub(crate) fn with_controller<F>(app_handle: &AppHandle, apply: F)
where
    F: FnOnce(&mut WebLoadController) + Send + 'static,
{
    let handle = app_handle.clone();
    let dispatched = app_handle.run_on_main_thread(move || {
        let state = handle.state::<ShellState>();
        match state.controller.lock() {
            Ok(mut controller) => apply(&mut controller),
            Err(_) => append_shell_log("load controller lock poisoned; dropping event"),
        };
    });
    if let Err(error) = dispatched {
        append_shell_log(&format!("failed to dispatch to the shell thread: {error}"));
    }
}
