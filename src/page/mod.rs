pub mod health_handler;
pub mod predict_handler;

use crate::client::service_trait::PredictionService;
use crate::ui::ui_traits::{Notifier, ResultPanel, StatusLine};
use health_handler::{HealthHandler, HealthOutcome};
use log::debug;
use predict_handler::{PredictHandler, SubmitOutcome};
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct UiTargets {
    pub panel: Arc<dyn ResultPanel>,
    pub status: Arc<dyn StatusLine>,
    pub notifier: Arc<dyn Notifier>,
}

/// Both interactions wired to one prediction server. The handlers share the
/// service but never each other's targets.
#[derive(Clone)]
pub struct Page {
    predict: PredictHandler,
    health: HealthHandler,
}

impl Page {
    pub fn init(service: Arc<dyn PredictionService>, targets: UiTargets, latest_only: bool) -> Self {
        debug!("wiring page handlers (latest_only={latest_only})");
        Page {
            predict: PredictHandler::new(
                service.clone(),
                targets.panel,
                targets.notifier,
                latest_only,
            ),
            health: HealthHandler::new(service, targets.status),
        }
    }

    pub async fn submit(&self, raw_input: &str) -> SubmitOutcome {
        self.predict.on_submit(raw_input).await
    }

    /// Runs a submission in the background. Nothing cancels or orders these.
    pub fn spawn_submit(&self, raw_input: String) -> JoinHandle<SubmitOutcome> {
        let handler = self.predict.clone();
        tokio::spawn(async move { handler.on_submit(&raw_input).await })
    }

    pub async fn check_health(&self) -> HealthOutcome {
        self.health.on_click().await
    }

    pub fn spawn_health_check(&self) -> JoinHandle<HealthOutcome> {
        let handler = self.health.clone();
        tokio::spawn(async move { handler.on_click().await })
    }
}
