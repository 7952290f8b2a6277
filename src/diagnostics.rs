use std::sync::Arc;

use parking_lot::Mutex;

/// Process-wide warning emitter consumed by builtins.
///
/// Fire-and-forget: a sink never affects control flow, and builtins emit at
/// most one message per degraded call.
pub trait DiagnosticSink: Send + Sync {
    fn warning(&self, message: &str);
}

/// Default sink forwarding warnings to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warning(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Shared sink collecting warnings for introspection during tests.
#[derive(Clone, Default)]
pub struct DiagnosticBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl DiagnosticBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a point-in-time copy of the collected messages.
    pub fn snapshot(&self) -> Vec<String> {
        self.inner.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl DiagnosticSink for DiagnosticBuffer {
    fn warning(&self, message: &str) {
        self.inner.lock().push(message.to_string());
    }
}
