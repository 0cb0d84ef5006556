//! Display targets the handlers write to. Writes are synchronous and cheap;
//! implementations only need interior mutability.

/// The result container: hidden until the first `show`. One `show` writes
/// label and scores and reveals the panel as a single update, so concurrent
/// renders never mix the fields of two responses.
pub trait ResultPanel: Send + Sync {
    fn show(&self, label: &str, scores: &str);
}

pub trait StatusLine: Send + Sync {
    fn set_status(&self, text: &str);
}

/// A failure notice the user has to acknowledge.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
