use legaldraft_types::Notifier;

/// Sends notifications to the `tracing` log.
///
/// Useful when no UI is attached, e.g. in batch generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!(target: "legaldraft::notice", "{message}");
    }

    fn notify_error(&self, message: &str) {
        tracing::warn!(target: "legaldraft::notice", "{message}");
    }
}
