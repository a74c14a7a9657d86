use url::Url;

use crate::{
    app_constants::LOAD_TIMEOUT,
    load_status::LoadStatus,
    webview_host::{LoadRequest, WebViewFactory},
};

pub(crate) type StatusObserver = Box<dyn Fn(&LoadStatus) + Send>;

/// Owns the lifecycle of the single game resource: receives navigation
/// callbacks and connectivity signals, and republishes the current
/// `LoadStatus` to subscribed observers.
///
/// All mutation must happen on one execution context (see `ui_dispatch`);
/// the controller itself takes `&mut self` and does no locking.
pub(crate) struct WebLoadController {
    resource: Url,
    status: LoadStatus,
    factory: Option<WebViewFactory>,
    attempt: u64,
    last_progress: Option<f64>,
    observers: Vec<StatusObserver>,
}

impl WebLoadController {
    pub(crate) fn new(resource: Url) -> Self {
        Self {
            resource,
            status: LoadStatus::Standby,
            factory: None,
            attempt: 0,
            last_progress: None,
            observers: Vec::new(),
        }
    }

    pub(crate) fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub(crate) fn resource(&self) -> &Url {
        &self.resource
    }

    /// Sequence number of the attempt currently being honored. Callbacks
    /// carrying any other number are stale and will be dropped.
    pub(crate) fn current_attempt(&self) -> u64 {
        self.attempt
    }

    pub(crate) fn subscribe(&mut self, observer: impl Fn(&LoadStatus) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Stores the browser-view factory and immediately starts a fresh load.
    /// Repeated calls replace the factory and re-trigger; this is also the
    /// only way out of `Failure`.
    pub(crate) fn attach_web_view(&mut self, factory: WebViewFactory) {
        self.factory = Some(factory);
        self.trigger_load();
    }

    pub(crate) fn set_connectivity(&mut self, available: bool) {
        match (available, &self.status) {
            (true, LoadStatus::NoConnection) => self.trigger_load(),
            (false, _) => {
                // Pre-empt any in-flight attempt so late navigation events
                // cannot overwrite the offline state.
                self.attempt += 1;
                self.last_progress = None;
                self.set_status(LoadStatus::NoConnection);
            }
            _ => {}
        }
    }

    /// Progress estimate from the browser view, independent of the discrete
    /// navigation events. Consecutive duplicates are suppressed with an
    /// immediate-prior-value filter; full progress converges on `Finished`.
    pub(crate) fn handle_progress(&mut self, attempt: u64, value: f64) {
        if self.is_stale(attempt) {
            return;
        }
        if self.last_progress == Some(value) {
            return;
        }
        self.last_progress = Some(value);
        if value < 1.0 {
            self.set_status(LoadStatus::Progressing { progress: value });
        } else {
            self.set_status(LoadStatus::Finished);
        }
    }

    pub(crate) fn handle_navigation_finished(&mut self, attempt: u64) {
        if self.is_stale(attempt) {
            return;
        }
        self.set_status(LoadStatus::Finished);
    }

    pub(crate) fn handle_navigation_failed(&mut self, attempt: u64, reason: &str) {
        if self.is_stale(attempt) {
            return;
        }
        self.set_status(LoadStatus::Failure {
            reason: reason.to_string(),
        });
    }

    /// Fired by the per-request timer. Only a still-progressing attempt can
    /// time out; anything that already finished or failed keeps its state.
    pub(crate) fn handle_load_timeout(&mut self, attempt: u64) {
        if self.is_stale(attempt) {
            return;
        }
        if !matches!(self.status, LoadStatus::Progressing { .. }) {
            return;
        }
        self.set_status(LoadStatus::Failure {
            reason: format!("load timed out after {}s", LOAD_TIMEOUT.as_secs()),
        });
    }

    /// Starts a new attempt: bumps the sequence number, resets the duplicate
    /// filter, publishes `Progressing(0)` and hands the request to a fresh
    /// browser view. A no-op while no factory is attached.
    fn trigger_load(&mut self) {
        let Some(factory) = self.factory.as_ref() else {
            return;
        };
        let web_view = factory();
        self.attempt += 1;
        self.last_progress = None;
        let request = LoadRequest {
            url: self.resource.clone(),
            timeout: LOAD_TIMEOUT,
            attempt: self.attempt,
        };
        self.set_status(LoadStatus::Progressing { progress: 0.0 });
        if let Err(reason) = web_view.load(&request) {
            self.set_status(LoadStatus::Failure { reason });
        }
    }

    /// An event is stale when its attempt was superseded, or when the
    /// attempt already reached a terminal state.
    fn is_stale(&self, attempt: u64) -> bool {
        attempt != self.attempt
            || matches!(
                self.status,
                LoadStatus::Finished | LoadStatus::Failure { .. }
            )
    }

    /// Publish-on-write, gated on the equivalence check rather than raw
    /// equality so near-duplicate progress values stay silent.
    fn set_status(&mut self, next: LoadStatus) {
        if next.is_equivalent(&self.status) {
            return;
        }
        self.status = next;
        for observer in &self.observers {
            observer(&self.status);
        }
    }
}
