use url::Url;

/// The webview exposes no native progress estimate, so the shell injects a
/// small script into the game page that derives one from the document ready
/// state and reports it through the bridge, tagged with the attempt it
/// belongs to. Uncaught errors before the page completes are reported as a
/// best-effort failure signal.
pub(crate) fn probe_script(attempt: u64) -> String {
    format!(
        r#"(function () {{
  if (!window.__TAURI__ || !window.__TAURI__.core) {{ return; }}
  if (window.__FARM_SHELL_PROBE__ === {attempt}) {{ return; }}
  window.__FARM_SHELL_PROBE__ = {attempt};
  var invoke = window.__TAURI__.core.invoke;
  var report = function (progress) {{
    invoke('shell_report_load_progress', {{ attempt: {attempt}, progress: progress }}).catch(function () {{}});
  }};
  var fraction = function () {{
    switch (document.readyState) {{
      case 'interactive': return 0.7;
      case 'complete': return 1.0;
      default: return 0.3;
    }}
  }};
  window.addEventListener('error', function (event) {{
    if (document.readyState !== 'complete') {{
      invoke('shell_report_load_failure', {{
        attempt: {attempt},
        reason: String(event.message || 'page error')
      }}).catch(function () {{}});
    }}
  }});
  var timer = setInterval(function () {{
    var progress = fraction();
    report(progress);
    if (progress >= 1.0) {{ clearInterval(timer); }}
  }}, 200);
  report(fraction());
}})();"#
    )
}

/// Navigation lifecycle events are only honored for the configured game
/// origin; the local overlay page and anything else stay untracked.
pub(crate) fn should_track_navigation(game_url: &Url, page_url: &Url) -> bool {
    page_url.scheme() == game_url.scheme() && page_url.host_str() == game_url.host_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_url() -> Url {
        Url::parse("https://chickenpotato.top/play/").expect("game url")
    }

    #[test]
    fn tracks_pages_on_the_game_origin() {
        let page = Url::parse("https://chickenpotato.top/play/index.html").expect("page url");
        assert!(should_track_navigation(&game_url(), &page));
    }

    #[test]
    fn ignores_other_hosts_and_the_local_overlay() {
        let other = Url::parse("https://example.com/play/").expect("other url");
        assert!(!should_track_navigation(&game_url(), &other));

        let overlay = Url::parse("tauri://localhost/").expect("overlay url");
        assert!(!should_track_navigation(&game_url(), &overlay));
    }

    #[test]
    fn probe_script_is_tagged_with_the_attempt() {
        let script = probe_script(7);
        assert!(script.contains("attempt: 7"));
        assert!(script.contains("shell_report_load_progress"));
        assert!(script.contains("shell_report_load_failure"));
    }
}
