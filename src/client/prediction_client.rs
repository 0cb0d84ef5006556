use super::client_types::{HealthResponse, PredictRequest, PredictResponse};
use super::service_trait::{ClientError, PredictionService};
use crate::config::ClientConfig;
use async_trait::async_trait;
use log::debug;
use reqwest::{Response, Url};
use std::time::Duration;

pub struct PredictionClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PredictionClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // endpoints are joined relative to the base, so it has to end with a slash
        let mut base = config.server_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url =
            Url::parse(&base).map_err(|_| ClientError::InvalidUrl(config.server_url.clone()))?;

        Ok(PredictionClient { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|_| ClientError::InvalidUrl(format!("{}{}", self.base_url, path)))
    }

    async fn read_body(response: Response) -> Result<String, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl PredictionService for PredictionClient {
    async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ClientError> {
        let mut url = self.endpoint("predict")?;
        url.query_pairs_mut().append_pair("verbose", "true");
        debug!("POST {url}");

        let response = self.client.post(url).json(request).send().await?;
        let body = Self::read_body(response).await?;
        let prediction = PredictResponse::from_json(&body)?;
        if let Some(version) = prediction.version.as_deref() {
            debug!("prediction served by model version {version}");
        }
        Ok(prediction)
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = self.endpoint("health")?;
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let body = Self::read_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
