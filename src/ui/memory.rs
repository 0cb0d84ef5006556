use super::ui_traits::{Notifier, ResultPanel, StatusLine};
use std::sync::{Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub prediction: String,
    pub scores: String,
    pub hidden: bool,
    pub reveals: usize,
}

impl Default for PanelState {
    fn default() -> Self {
        PanelState {
            prediction: String::new(),
            scores: String::new(),
            hidden: true,
            reveals: 0,
        }
    }
}

#[derive(Default)]
pub struct MemoryPanel {
    state: Mutex<PanelState>,
}

impl MemoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PanelState {
        lock(&self.state).clone()
    }
}

impl ResultPanel for MemoryPanel {
    fn show(&self, label: &str, scores: &str) {
        let mut state = lock(&self.state);
        state.prediction = label.to_string();
        state.scores = scores.to_string();
        state.hidden = false;
        state.reveals += 1;
    }
}

#[derive(Default)]
pub struct MemoryStatus {
    text: Mutex<String>,
}

impl MemoryStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        lock(&self.text).clone()
    }
}

impl StatusLine for MemoryStatus {
    fn set_status(&self, text: &str) {
        *lock(&self.text) = text.to_string();
    }
}

#[derive(Default)]
pub struct MemoryNotifier {
    alerts: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }
}

impl Notifier for MemoryNotifier {
    fn alert(&self, message: &str) {
        lock(&self.alerts).push(message.to_string());
    }
}
