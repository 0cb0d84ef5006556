use crate::client::client_types::{PredictRequest, PredictResponse};
use crate::client::service_trait::PredictionService;
use crate::ui::ui_traits::{Notifier, ResultPanel};
use crate::ui::ui_utils::{render_prediction, render_scores};
use log::{debug, error};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const PREDICT_ALERT: &str = "Predict failed. Check server logs and console.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, no request was sent.
    Skipped,
    Rendered,
    /// A newer submission was issued while this one was in flight.
    Stale,
    Failed,
}

#[derive(Clone)]
pub struct PredictHandler {
    service: Arc<dyn PredictionService>,
    panel: Arc<dyn ResultPanel>,
    notifier: Arc<dyn Notifier>,
    generation: Option<Arc<AtomicU64>>,
}

impl PredictHandler {
    pub fn new(
        service: Arc<dyn PredictionService>,
        panel: Arc<dyn ResultPanel>,
        notifier: Arc<dyn Notifier>,
        latest_only: bool,
    ) -> Self {
        PredictHandler {
            service,
            panel,
            notifier,
            generation: latest_only.then(|| Arc::new(AtomicU64::new(0))),
        }
    }

    pub async fn on_submit(&self, raw_input: &str) -> SubmitOutcome {
        let text = raw_input.trim();
        if text.is_empty() {
            debug!("ignoring blank submission");
            return SubmitOutcome::Skipped;
        }

        let ticket = self
            .generation
            .as_ref()
            .map(|generation| generation.fetch_add(1, Ordering::SeqCst) + 1);

        let request = PredictRequest {
            text: text.to_string(),
        };
        match self.service.predict(&request).await {
            Ok(response) => {
                if let (Some(generation), Some(ticket)) = (self.generation.as_ref(), ticket) {
                    let latest = generation.load(Ordering::SeqCst);
                    if latest != ticket {
                        debug!("dropping stale prediction #{ticket}, latest is #{latest}");
                        return SubmitOutcome::Stale;
                    }
                }
                self.render(&response);
                SubmitOutcome::Rendered
            }
            Err(err) => {
                error!("Predict failed: {err}");
                self.notifier.alert(PREDICT_ALERT);
                SubmitOutcome::Failed
            }
        }
    }

    fn render(&self, response: &PredictResponse) {
        self.panel.show(
            render_prediction(response),
            &render_scores(response.scores.as_ref()),
        );
    }
}
