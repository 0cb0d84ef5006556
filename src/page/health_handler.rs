use crate::client::service_trait::PredictionService;
use crate::ui::ui_traits::StatusLine;
use log::error;
use std::sync::Arc;

pub const HEALTH_DOWN: &str = "down";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthOutcome {
    /// Carries the serialized payload that was displayed.
    Up(String),
    Down,
}

#[derive(Clone)]
pub struct HealthHandler {
    service: Arc<dyn PredictionService>,
    status: Arc<dyn StatusLine>,
}

impl HealthHandler {
    pub fn new(service: Arc<dyn PredictionService>, status: Arc<dyn StatusLine>) -> Self {
        HealthHandler { service, status }
    }

    pub async fn on_click(&self) -> HealthOutcome {
        let payload = match self.service.health().await {
            Ok(payload) => payload,
            Err(err) => return self.mark_down(&err),
        };
        match serde_json::to_string(&payload) {
            Ok(text) => {
                self.status.set_status(&text);
                HealthOutcome::Up(text)
            }
            Err(err) => self.mark_down(&err),
        }
    }

    fn mark_down(&self, err: &dyn std::error::Error) -> HealthOutcome {
        error!("Health failed: {err}");
        self.status.set_status(HEALTH_DOWN);
        HealthOutcome::Down
    }
}

#[cfg(test)]
mod tests {
    use super::{HealthHandler, HealthOutcome, HEALTH_DOWN};
    use crate::client::scripted::ScriptedService;
    use crate::client::service_trait::ClientError;
    use crate::ui::memory::MemoryStatus;
    use serde_json::json;
    use std::sync::Arc;

    fn handler() -> (Arc<ScriptedService>, Arc<MemoryStatus>, HealthHandler) {
        let service = Arc::new(ScriptedService::new());
        let status = Arc::new(MemoryStatus::new());
        let handler = HealthHandler::new(service.clone(), status.clone());
        (service, status, handler)
    }

    #[tokio::test]
    async fn test_healthy_payload_shown_verbatim() {
        let (service, status, handler) = handler();
        service.push_health(Ok(json!({"status": "ok"})));

        let outcome = handler.on_click().await;
        assert_eq!(outcome, HealthOutcome::Up(String::from(r#"{"status":"ok"}"#)));
        assert_eq!(status.text(), r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_field_order_is_kept() {
        let (service, status, handler) = handler();
        service.push_health(Ok(serde_json::from_str(
            r#"{"status":"ok","model":"tfidf-logreg","version":"na"}"#,
        )
        .unwrap()));

        handler.on_click().await;
        assert_eq!(
            status.text(),
            r#"{"status":"ok","model":"tfidf-logreg","version":"na"}"#
        );
    }

    #[tokio::test]
    async fn test_failure_marks_down() {
        let (service, status, handler) = handler();
        service.push_health(Err(ClientError::Status(503)));

        assert_eq!(handler.on_click().await, HealthOutcome::Down);
        assert_eq!(status.text(), HEALTH_DOWN);
    }

    #[tokio::test]
    async fn test_recovers_after_down() {
        let (service, status, handler) = handler();
        service.push_health(Err(ClientError::Status(502)));
        service.push_health(Ok(json!({"status": "ok"})));

        handler.on_click().await;
        assert_eq!(status.text(), "down");
        handler.on_click().await;
        assert_eq!(status.text(), r#"{"status":"ok"}"#);
    }
}
