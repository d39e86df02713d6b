//! Navigation sinks

use crate::interface::Navigator;
use std::sync::{Arc, Mutex};

/// Keeps every navigation target in order. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        match self.visited.lock() {
            Ok(visited) => visited.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        match self.visited.lock() {
            Ok(mut visited) => visited.push(url.to_string()),
            Err(poisoned) => poisoned.into_inner().push(url.to_string()),
        }
    }
}

/// Logs the target instead of going anywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, url: &str) {
        log::info!("Redirecting to {url}");
    }
}

#[cfg(feature = "wasm")]
pub use window::WindowNavigator;

#[cfg(feature = "wasm")]
mod window {
    use crate::interface::Navigator;

    /// Sets `window.location.href`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct WindowNavigator;

    impl Navigator for WindowNavigator {
        fn navigate(&self, url: &str) {
            let Some(window) = web_sys::window() else {
                log::error!("No window to redirect to {url}");
                return;
            };
            if let Err(e) = window.location().set_href(url) {
                log::error!("Failed to redirect to {url}: {e:?}");
            }
        }
    }
}
