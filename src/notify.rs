/// User-notification seam.
///
/// The session manager announces network changes and missing-provider
/// failures; the actual notification surface (toasts in the storefront)
/// lives outside this crate, so it is injected. The default sink logs.

pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier that routes notices to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}
