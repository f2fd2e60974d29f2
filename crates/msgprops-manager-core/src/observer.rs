use msgprops_core::MessageId;

/// Receives a notification for every lookup that found no message.
///
/// Called synchronously on the rendering thread; implementations must not
/// block and must not panic.
pub trait MissObserver: Send + Sync {
    fn lookup_missed(&self, tag: &str, id: MessageId);
}

impl<F> MissObserver for F
where
    F: Fn(&str, MessageId) + Send + Sync,
{
    fn lookup_missed(&self, tag: &str, id: MessageId) {
        self(tag, id)
    }
}

/// Reports misses as `tracing` events at `INFO` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl MissObserver for TracingObserver {
    fn lookup_missed(&self, tag: &str, id: MessageId) {
        tracing::info!(tag, %id, "MessageBundle[{}]::lookup({}) failed", tag, id);
    }
}
