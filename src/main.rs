#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod connectivity;
mod game_config;
mod load_controller;
mod load_status;
mod logging;
mod main_window;
mod progress_probe;
mod shell_commands;
mod ui_dispatch;
mod webview_host;

pub(crate) use app_types::{ShellBridgeResult, ShellState};
pub(crate) use logging::append_shell_log;

fn main() {
    app_runtime::run();
}
