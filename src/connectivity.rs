use std::{
    net::{TcpStream, ToSocketAddrs},
    thread,
    time::Duration,
};

use tauri::AppHandle;
use url::Url;

use crate::{
    app_constants::{CONNECTIVITY_POLL_INTERVAL, CONNECTIVITY_PROBE_TIMEOUT_MS},
    logging::append_shell_log,
    ui_dispatch,
};

/// Polls reachability of the game host and forwards *changes* to the load
/// controller as connectivity signals.
pub(crate) fn spawn_connectivity_watcher(app_handle: AppHandle, game_url: Url) {
    thread::spawn(move || {
        let mut last_available: Option<bool> = None;
        loop {
            let available = probe_reachability(&game_url, CONNECTIVITY_PROBE_TIMEOUT_MS);
            if last_available != Some(available) {
                last_available = Some(available);
                append_shell_log(&format!(
                    "connectivity changed: {}",
                    if available { "online" } else { "offline" }
                ));
                ui_dispatch::with_controller(&app_handle, move |controller| {
                    controller.set_connectivity(available);
                });
            }
            thread::sleep(CONNECTIVITY_POLL_INTERVAL);
        }
    });
}

/// True when any resolved address of the game host accepts a TCP
/// connection within the timeout.
pub(crate) fn probe_reachability(url: &Url, timeout_ms: u64) -> bool {
    let Some((host, port)) = probe_endpoint(url) else {
        return false;
    };
    let timeout = Duration::from_millis(timeout_ms.max(50));

    let addrs = match (host.as_str(), port).to_socket_addrs() {
        Ok(addrs) => addrs.collect::<Vec<_>>(),
        Err(_) => return false,
    };
    addrs
        .iter()
        .any(|address| TcpStream::connect_timeout(address, timeout).is_ok())
}

pub(crate) fn probe_endpoint(url: &Url) -> Option<(String, u16)> {
    let host = url.host_str()?.to_string();
    let port = url.port_or_known_default()?;
    Some((host, port))
}
