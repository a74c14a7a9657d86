use tauri::{webview::PageLoadEvent, Emitter, Manager, RunEvent};

use crate::{
    app_constants::{MAIN_WINDOW_LABEL, STATUS_EVENT},
    append_shell_log, connectivity, game_config, main_window, progress_probe, shell_commands,
    ui_dispatch, ShellState,
};

pub(crate) fn run() {
    let game_url = game_config::resolve_game_url();
    append_shell_log("desktop shell starting");
    append_shell_log(&format!("game resource: {game_url}"));

    let page_load_game_url = game_url.clone();

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app_handle, _argv, _cwd| {
            if let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
                let _ = window.unminimize();
                let _ = window.set_focus();
            }
        }))
        .manage(ShellState::new(game_url))
        .invoke_handler(tauri::generate_handler![
            shell_commands::shell_get_load_status,
            shell_commands::shell_report_load_progress,
            shell_commands::shell_report_load_failure,
            shell_commands::shell_retry_load,
        ])
        .on_page_load(move |webview, payload| {
            if webview.window().label() != MAIN_WINDOW_LABEL {
                return;
            }
            if !progress_probe::should_track_navigation(&page_load_game_url, payload.url()) {
                return;
            }

            let app_handle = webview.app_handle().clone();
            let attempt = current_attempt(&app_handle);
            match payload.event() {
                PageLoadEvent::Started => {
                    append_shell_log(&format!("game page-load started: {}", payload.url()));
                    if let Err(error) = webview.eval(&progress_probe::probe_script(attempt)) {
                        append_shell_log(&format!("failed to inject progress probe: {error}"));
                    }
                }
                PageLoadEvent::Finished => {
                    append_shell_log(&format!("game page-load finished: {}", payload.url()));
                    ui_dispatch::with_controller(&app_handle, move |controller| {
                        controller.handle_navigation_finished(attempt);
                    });
                }
            }
        })
        .setup(move |app| {
            let app_handle = app.handle().clone();

            let observer_handle = app_handle.clone();
            ui_dispatch::with_controller(&app_handle, move |controller| {
                controller.subscribe(move |status| {
                    if let Some(progress) = status.progress() {
                        append_shell_log(&format!("game loading {:.0}%", progress * 100.0));
                    } else {
                        append_shell_log(&format!(
                            "load status -> {}",
                            serde_json::to_string(status).unwrap_or_else(|_| format!("{status:?}"))
                        ));
                    }
                    if let Err(error) = observer_handle.emit(STATUS_EVENT, status.clone()) {
                        append_shell_log(&format!("failed to publish load status: {error}"));
                    }
                    if status.is_successful() {
                        append_shell_log("game page ready");
                    }
                    if status.has_error() {
                        main_window::show_overlay(&observer_handle);
                    }
                });
            });

            let watcher_url = {
                let state = app_handle.state::<ShellState>();
                let url = state
                    .controller
                    .lock()
                    .map(|controller| controller.resource().clone());
                url.unwrap_or_else(|_| game_config::default_game_url())
            };
            shell_commands::attach_game_web_view(&app_handle);
            connectivity::spawn_connectivity_watcher(app_handle, watcher_url);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|_app_handle, event| {
            if let RunEvent::Exit = event {
                append_shell_log("desktop shell exiting");
            }
        });
}

/// Attempt currently honored by the controller; used to tag page-load
/// events arriving from the webview engine.
fn current_attempt(app_handle: &tauri::AppHandle) -> u64 {
    let state = app_handle.state::<ShellState>();
    let attempt = match state.controller.lock() {
        Ok(controller) => controller.current_attempt(),
        Err(_) => 0,
    };
    attempt
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    #[test]
    fn page_events_are_scoped_to_the_game_origin() {
        let game_url = game_config::default_game_url();
        let game_page = Url::parse("https://chickenpotato.top/play/").expect("game page");
        let overlay = Url::parse("tauri://localhost/").expect("overlay page");
        assert!(progress_probe::should_track_navigation(&game_url, &game_page));
        assert!(!progress_probe::should_track_navigation(&game_url, &overlay));
    }
}
