//! Engine configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Polling cadence and deadline for a generation operation.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Pause between status refreshes
    pub interval: Duration,
    /// Overall deadline; `None` polls until the operation completes
    pub deadline: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            deadline: Some(Duration::from_secs(1200)),
        }
    }
}

impl PollPolicy {
    /// Create policy from environment variables.
    ///
    /// `VGEN_POLL_DEADLINE_SECS=0` disables the deadline.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let interval = std::env::var("VGEN_POLL_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.interval);
        let deadline = match std::env::var("VGEN_POLL_DEADLINE_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.deadline,
        };
        Self { interval, deadline }
    }

    /// Poll forever, as the original front-end did.
    pub fn unbounded() -> Self {
        Self {
            deadline: None,
            ..Self::default()
        }
    }
}

/// Orchestrator configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory generated videos are written to
    pub output_dir: PathBuf,
    /// Polling behavior
    pub poll: PollPolicy,
}

impl EngineConfig {
    /// Create config from environment variables, with platform defaults for
    /// the output directory.
    pub fn from_env() -> Self {
        let output_dir = std::env::var("VGEN_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_output_dir());

        Self {
            output_dir,
            poll: PollPolicy::from_env(),
        }
    }

    /// Use a specific output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            poll: PollPolicy::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    dirs::video_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("vgen")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_policy_defaults() {
        let policy = PollPolicy::default();
        assert_eq!(policy.interval, Duration::from_secs(10));
        assert_eq!(policy.deadline, Some(Duration::from_secs(1200)));
    }

    #[test]
    fn test_unbounded_policy_keeps_interval() {
        let policy = PollPolicy::unbounded();
        assert_eq!(policy.interval, Duration::from_secs(10));
        assert!(policy.deadline.is_none());
    }
}
