//! Outcome recording
//!
//! Services report the message of every operation outcome through an
//! [`EventRecorder`] so that logging can be swapped out in tests.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;

/// Target used for outcome events
pub const EVENT_TARGET: &str = "feed::events";

/// Sink for operation outcome messages
pub trait EventRecorder: Send + Sync {
    fn record(&self, level: Level, message: &str);
}

/// Forwards outcomes to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRecorder;

impl EventRecorder for TracingRecorder {
    fn record(&self, level: Level, message: &str) {
        if level == Level::ERROR {
            tracing::error!(target: EVENT_TARGET, "{message}");
        } else if level == Level::WARN {
            tracing::warn!(target: EVENT_TARGET, "{message}");
        } else if level == Level::INFO {
            tracing::info!(target: EVENT_TARGET, "{message}");
        } else if level == Level::DEBUG {
            tracing::debug!(target: EVENT_TARGET, "{message}");
        } else {
            tracing::trace!(target: EVENT_TARGET, "{message}");
        }
    }
}

/// Keeps recorded outcomes in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl MemoryRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    #[must_use]
    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().clone()
    }

    /// Messages recorded at the given level
    #[must_use]
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl EventRecorder for MemoryRecorder {
    fn record(&self, level: Level, message: &str) {
        self.events.lock().push((level, message.to_string()));
    }
}
