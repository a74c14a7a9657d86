use std::env;

use url::Url;

use crate::{
    app_constants::{DEFAULT_GAME_URL, GAME_URL_ENV},
    logging::append_shell_log,
};

/// Validates a candidate game URL. Only http/https resources are navigable
/// by the shell window.
pub(crate) fn parse_game_url(raw: &str) -> Result<Url, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Missing game URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid game URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported game URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

/// The resource the shell loads: env override when valid, otherwise the
/// packaged default.
pub(crate) fn resolve_game_url() -> Url {
    if let Ok(raw) = env::var(GAME_URL_ENV) {
        match parse_game_url(&raw) {
            Ok(url) => return url,
            Err(error) => {
                append_shell_log(&format!(
                    "ignoring {GAME_URL_ENV} override '{raw}': {error}"
                ));
            }
        }
    }

    default_game_url()
}

pub(crate) fn default_game_url() -> Url {
    match parse_game_url(DEFAULT_GAME_URL) {
        Ok(url) => url,
        // The default is a compile-time constant; reaching this means the
        // constant itself is broken.
        Err(error) => unreachable!("default game URL must parse: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_game_url_parses() {
        let url = default_game_url();
        assert_eq!(url.as_str(), "https://chickenpotato.top/play/");
        assert_eq!(url.host_str(), Some("chickenpotato.top"));
    }

    #[test]
    fn parse_game_url_trims_surrounding_whitespace() {
        let url = parse_game_url("  https://chickenpotato.top/play/  ").expect("trimmed url");
        assert_eq!(url.as_str(), "https://chickenpotato.top/play/");
    }

    #[test]
    fn parse_game_url_rejects_empty_input() {
        assert!(parse_game_url("   ").is_err());
    }

    #[test]
    fn parse_game_url_rejects_non_web_schemes() {
        let error = parse_game_url("file:///etc/passwd").expect_err("file scheme");
        assert!(error.contains("file"));
        assert!(parse_game_url("not a url").is_err());
    }
}
