//! Progress reporting.

/// Best-effort sink for human-readable progress text.
///
/// Fire-and-forget: no acknowledgment, no delivery guarantee beyond "the most
/// recent message wins" from the caller's perspective.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, message: &str);
}

/// Sink that discards every message.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&self, _message: &str) {}
}

/// Adapter turning a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F> ProgressSink for FnSink<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, message: &str) {
        (self.0)(message)
    }
}

impl ProgressSink for tokio::sync::mpsc::UnboundedSender<String> {
    fn emit(&self, message: &str) {
        // A dropped receiver just means nobody is listening anymore.
        let _ = self.send(message.to_string());
    }
}
