//! Logging collaborator for swallowed delivery failures.

/// Sink for errors the adapter records instead of returning.
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);
}

/// Forwards to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
