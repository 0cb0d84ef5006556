use super::ui_traits::{Notifier, ResultPanel, StatusLine};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Prints label and scores together; nothing reaches the terminal before the
/// first `show`.
pub struct TerminalPanel<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalPanel<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalPanel<W> {
    pub fn new(out: W) -> Self {
        TerminalPanel {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> ResultPanel for TerminalPanel<W> {
    fn show(&self, label: &str, scores: &str) {
        let mut out = self.out.lock().unwrap_or_else(|p| p.into_inner());
        // a closed pipe is not worth failing the handler over
        let _ = writeln!(out, "Prediction: {label}\nScores: {scores}");
        let _ = out.flush();
    }
}

pub struct TerminalStatus<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalStatus<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalStatus<W> {
    pub fn new(out: W) -> Self {
        TerminalStatus {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> StatusLine for TerminalStatus<W> {
    fn set_status(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(|p| p.into_inner());
        let _ = writeln!(out, "Health: {text}");
        let _ = out.flush();
    }
}

/// Prints a framed notice on stderr and counts how many were raised, so the
/// one-shot commands can turn an alert into a failing exit status.
#[derive(Default)]
pub struct TerminalNotifier {
    raised: AtomicUsize,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raised(&self) -> usize {
        self.raised.load(Ordering::SeqCst)
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        self.raised.fetch_add(1, Ordering::SeqCst);
        let rule = "!".repeat(message.chars().count() + 4);
        eprintln!("{rule}\n! {message} !\n{rule}");
    }
}
