/// Host page operations the handler needs after a response arrives.
pub trait PageSurface: Send + Sync {
    /// Replace the current page with `url`.
    fn navigate(&self, url: &str);
    /// Blocking, user-visible notification.
    fn alert(&self, message: &str);
}

/// Page surface for the command-line host: the navigation target goes to
/// stdout, alerts to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePage;

impl PageSurface for ConsolePage {
    fn navigate(&self, url: &str) {
        tracing::info!(url, "navigating");
        println!("{}", url);
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
