//! Client HTTP du service d'analyse

use crate::config::ServiceConfig;
use crate::error::{AnalysisError, Result};
use crate::model::{AnalysisRequest, AnalysisResult, ServiceErrorBody};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Collaborateur qui réalise l'analyse d'une séquence
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;
}

/// Service d'analyse joint en `POST` JSON
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    endpoint: reqwest::Url,
    client: reqwest::Client,
}

impl HttpAnalysisService {
    /// Crée le client depuis la configuration
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AnalysisError::Config(format!("client HTTP: {}", e)))?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint, length = request.sequence().len()))]
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        debug!("Envoi de la requête d'analyse");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Réponse reçue");

        if !status.is_success() {
            // Le service peut joindre {"error": "..."}; le corps reste facultatif
            let detail = response
                .bytes()
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<ServiceErrorBody>(&body).ok())
                .map(|body| body.error);

            return Err(AnalysisError::ResponseStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.bytes().await?;
        AnalysisResult::from_json(&body)
    }
}
