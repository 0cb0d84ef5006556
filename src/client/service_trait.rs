use super::client_types::{HealthResponse, PredictRequest, PredictResponse};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request could not complete: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid server url {0:?}")]
    InvalidUrl(String),
}

/// The two endpoints of the prediction server this console talks to.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ClientError>;
    async fn health(&self) -> Result<HealthResponse, ClientError>;
}
