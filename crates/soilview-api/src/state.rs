use tokio::sync::watch;

use crate::document::{HELLO_DOCUMENT, HTML_CONTENT_TYPE};
use crate::error::FatalServerError;

/// Shared handler state: the page to serve and the fault channel
#[derive(Debug)]
pub struct AppState {
    pub document: String,
    pub content_type: String,
    faults: watch::Sender<Option<String>>,
}

impl AppState {
    pub fn new(document: impl Into<String>, content_type: impl Into<String>) -> Self {
        let (faults, _) = watch::channel(None);
        Self {
            document: document.into(),
            content_type: content_type.into(),
            faults,
        }
    }

    /// Record a handler fault. The server stops after the current request.
    pub fn report_fault(&self, error: &FatalServerError) {
        self.faults.send_replace(Some(error.to_string()));
    }

    /// Watch for the first reported fault
    pub fn subscribe_faults(&self) -> watch::Receiver<Option<String>> {
        self.faults.subscribe()
    }

    pub fn fault(&self) -> Option<String> {
        self.faults.borrow().clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HELLO_DOCUMENT, HTML_CONTENT_TYPE)
    }
}
