use std::time::Duration;
use url::Url;

/// A single navigation request handed to the embedded browser view. The
/// attempt number tags every callback produced for this request so the
/// controller can discard events from superseded loads.
#[derive(Debug, Clone)]
pub(crate) struct LoadRequest {
    pub(crate) url: Url,
    pub(crate) timeout: Duration,
    pub(crate) attempt: u64,
}

/// The browser-view collaborator. `load` is fire-and-forget: lifecycle
/// events come back asynchronously through the controller's handlers.
pub(crate) trait WebViewHost: Send {
    fn load(&self, request: &LoadRequest) -> Result<(), String>;
}

/// Supplier of a browser-view instance, invoked once per triggered load.
pub(crate) type WebViewFactory = Box<dyn Fn() -> Box<dyn WebViewHost> + Send>;
