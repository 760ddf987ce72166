//! What happens to the typed value when Enter is pressed.
//!
//! One strategy is picked when the controller is built; the two are never
//! combined.

use crate::config::{SubmitConfig, SubmitPolicy};

/// Whether the input keeps its value after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSubmit {
    Clear,
    Keep,
}

pub trait SubmitHandler {
    /// Handle one submission of `value`
    fn on_submit(&mut self, value: &str) -> AfterSubmit;

    /// Current location, for handlers that navigate
    fn location(&self) -> Option<&str> {
        None
    }
}

/// Build the handler for the configured policy
pub fn from_config(config: &SubmitConfig) -> Box<dyn SubmitHandler> {
    match config.policy {
        SubmitPolicy::History => Box::new(HistoryNavigator::new(&config.initial_location)),
        SubmitPolicy::Log => Box::new(LogOnly),
    }
}

/// Session history: a list of locations and a cursor on the current one.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    current: usize,
}

impl History {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            current: 0,
        }
    }

    pub fn location(&self) -> &str {
        &self.entries[self.current]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Overwrite the current entry. Never adds one.
    pub fn replace_state(&mut self, url: &str) {
        tracing::debug!("replace_state: {} -> {}", self.entries[self.current], url);
        self.entries[self.current] = url.to_string();
    }
}

/// Navigates by replacing the current history entry with the query URL.
#[derive(Debug)]
pub struct HistoryNavigator {
    history: History,
}

impl HistoryNavigator {
    pub fn new(initial_location: &str) -> Self {
        Self {
            history: History::new(initial_location),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl SubmitHandler for HistoryNavigator {
    fn on_submit(&mut self, value: &str) -> AfterSubmit {
        // Value goes in verbatim, no percent-encoding
        let query = format!("search?query={value}");
        self.history.replace_state(&query);
        AfterSubmit::Clear
    }

    fn location(&self) -> Option<&str> {
        Some(self.history.location())
    }
}

/// Reports the query on the log channel and nothing else.
#[derive(Debug, Default)]
pub struct LogOnly;

impl SubmitHandler for LogOnly {
    fn on_submit(&mut self, value: &str) -> AfterSubmit {
        let query = format!("/search?query={value}");
        tracing::info!("{}", query);
        tracing::info!("{}", value);
        AfterSubmit::Keep
    }
}
