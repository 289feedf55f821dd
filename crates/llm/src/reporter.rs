//! Side channel for pipeline failures
//!
//! The pipeline never returns errors to its callers. Failures are handed to an
//! [`ErrorReporter`] and the operation yields `None`; each surface decides how
//! to show the reported message.

use std::sync::Mutex;
use tracing::{error, warn};

/// Receives user-facing error messages from the pipeline
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str);
}

/// Reporter that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, message: &str) {
        error!("{}", message);
    }
}

/// Collects reported messages for a single request or tool call
#[derive(Debug, Default)]
pub struct NoticeCollector {
    messages: Mutex<Vec<String>>,
}

impl NoticeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages reported so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages
            .lock()
            .map(|messages| messages.is_empty())
            .unwrap_or(true)
    }

    /// Take all collected messages, leaving the collector empty
    pub fn drain(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|mut messages| std::mem::take(&mut *messages))
            .unwrap_or_default()
    }
}

impl ErrorReporter for NoticeCollector {
    fn report(&self, message: &str) {
        warn!("{}", message);
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
