//! Debounced search input
//!
//! The raw text follows every keystroke; the debounced text only catches up
//! once the input has been quiet for the configured period. Each keystroke
//! re-arms the deadline, which cancels the one before it.

use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The search box content changed
    InputChanged { value: String, now: Option<Instant> },
    /// Time passed; settles the pending value once its deadline is reached
    Tick { now: Option<Instant> },
    /// Settle right away (Enter)
    Flushed,
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebouncedSearch {
    raw: String,
    debounced: String,
    deadline: Option<Instant>,
    quiet: Duration,
}

impl Default for DebouncedSearch {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl DebouncedSearch {
    pub fn new(quiet: Duration) -> Self {
        Self {
            raw: String::new(),
            debounced: String::new(),
            deadline: None,
            quiet,
        }
    }

    /// What the user has typed so far
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The value filters are computed from
    pub fn debounced(&self) -> &str {
        &self.debounced
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the newly debounced value when it changed
    pub fn update(&mut self, message: Message) -> Option<String> {
        match message {
            Message::InputChanged { value, now } => {
                self.raw = value;
                if self.raw == self.debounced {
                    self.deadline = None;
                } else {
                    let now = now.unwrap_or_else(Instant::now);
                    self.deadline = Some(now + self.quiet);
                }
                None
            }
            Message::Tick { now } => {
                let deadline = self.deadline?;
                let now = now.unwrap_or_else(Instant::now);
                if now >= deadline {
                    self.settle()
                } else {
                    None
                }
            }
            Message::Flushed => self.settle(),
            Message::Cleared => {
                self.raw.clear();
                self.settle()
            }
        }
    }

    fn settle(&mut self) -> Option<String> {
        self.deadline = None;
        if self.raw == self.debounced {
            return None;
        }
        self.debounced.clone_from(&self.raw);
        Some(self.debounced.clone())
    }
}
