use super::client_types::{HealthResponse, PredictRequest, PredictResponse};
use super::service_trait::{ClientError, PredictionService};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

pub(crate) struct Scripted<T> {
    pub delay: Duration,
    pub result: Result<T, ClientError>,
}

/// Replays canned results in order and records every predict request.
#[derive(Default)]
pub(crate) struct ScriptedService {
    predictions: Mutex<VecDeque<Scripted<PredictResponse>>>,
    health_checks: Mutex<VecDeque<Scripted<HealthResponse>>>,
    pub requests: Mutex<Vec<PredictRequest>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_predict(&self, delay_ms: u64, result: Result<PredictResponse, ClientError>) {
        self.predictions.lock().unwrap().push_back(Scripted {
            delay: Duration::from_millis(delay_ms),
            result,
        });
    }

    pub fn push_health(&self, result: Result<HealthResponse, ClientError>) {
        self.health_checks.lock().unwrap().push_back(Scripted {
            delay: Duration::ZERO,
            result,
        });
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PredictionService for ScriptedService {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ClientError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .predictions
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted prediction left");
        tokio::time::sleep(next.delay).await;
        next.result
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let next = self
            .health_checks
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted health check left");
        tokio::time::sleep(next.delay).await;
        next.result
    }
}
