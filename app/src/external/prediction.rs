//! Client for the disease prediction service

use reqwest::Client;
use serde::Serialize;

use shared::PredictionResult;

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

/// Request body for `POST /predict`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictRequest {
    pub crop: String,
    pub symptoms: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PredictionClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn predict(&self, request: &PredictRequest) -> AppResult<PredictionResult> {
        let url = format!("{}/predict", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "prediction service returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
