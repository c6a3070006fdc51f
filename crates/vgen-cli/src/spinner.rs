//! Progress spinner bridging the orchestrator's sink to the terminal.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use vgen_engine::ProgressSink;
use vgen_models::LOADING_MESSAGES;

/// Spinner that shows the most recent progress message, with a rotating
/// flavor line during the long polling stretch.
pub struct SpinnerSink {
    bar: ProgressBar,
    polls: AtomicUsize,
}

impl SpinnerSink {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template("{spinner} {msg}").expect("static template"));
        bar.enable_steady_tick(Duration::from_millis(120));
        Self {
            bar,
            polls: AtomicUsize::new(0),
        }
    }

    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    pub fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }
}

impl ProgressSink for SpinnerSink {
    fn emit(&self, message: &str) {
        if message.starts_with("Checking progress") {
            let polls = self.polls.fetch_add(1, Ordering::Relaxed);
            let flavor = LOADING_MESSAGES[polls % LOADING_MESSAGES.len()];
            self.bar.set_message(format!("{message} {flavor}"));
        } else {
            self.bar.set_message(message.to_string());
        }
    }
}

impl Default for SpinnerSink {
    fn default() -> Self {
        Self::new()
    }
}
