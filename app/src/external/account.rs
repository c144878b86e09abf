//! Client for the account and history backend
//!
//! The backend always answers HTTP 200 with a `success` flag; failures are
//! carried in the envelope, not the status code.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct AccountClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveDiagnosisRequest {
    pub user_id: i64,
    pub crop: String,
    pub symptoms: String,
    pub prediction: String,
    pub risk: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerHistoryItem {
    pub id: i64,
    pub date: String,
    pub disease: String,
    pub risk: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub history: Vec<ServerHistoryItem>,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

impl AccountClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> AppResult<Envelope> {
        self.post_json("/register", &CredentialsBody { username, password })
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        self.post_json("/login", &CredentialsBody { username, password })
            .await
    }

    pub async fn save_diagnosis(&self, request: &SaveDiagnosisRequest) -> AppResult<Envelope> {
        self.post_json("/save_diagnosis", request).await
    }

    pub async fn get_history(&self, user_id: i64) -> AppResult<HistoryResponse> {
        let url = format!("{}/get_history", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "account service returned {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> AppResult<R>
    where
        B: Serialize,
        R: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "account service returned {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }
}
