//! Diagnosis save and history handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::handlers::auth::MessageResponse;
use crate::services::diagnosis::{HistoryRow, SaveDiagnosisInput};
use crate::services::DiagnosisService;
use crate::AppState;

#[derive(Deserialize)]
pub struct SaveDiagnosisRequest {
    pub user_id: Option<i64>,
    pub crop: Option<String>,
    pub symptoms: Option<String>,
    pub prediction: Option<String>,
    pub risk: Option<String>,
    pub confidence: Option<f64>,
}

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub user_id: Option<i64>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<HistoryRow>,
}

/// Save diagnosis endpoint handler
pub async fn save_diagnosis(
    State(state): State<AppState>,
    Json(body): Json<SaveDiagnosisRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let input = SaveDiagnosisInput {
        user_id: body.user_id.ok_or(AppError::MissingField("user_id"))?,
        crop: body.crop.ok_or(AppError::MissingField("crop"))?,
        symptoms: body.symptoms.ok_or(AppError::MissingField("symptoms"))?,
        prediction: body.prediction.ok_or(AppError::MissingField("prediction"))?,
        risk: body.risk.ok_or(AppError::MissingField("risk"))?,
        confidence: body.confidence.ok_or(AppError::MissingField("confidence"))?,
    };

    let service = DiagnosisService::new(state.db.clone());
    service.save(input).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Diagnosis saved".to_string(),
    }))
}

/// History endpoint handler, newest rows first
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let user_id = query.user_id.ok_or(AppError::MissingField("user_id"))?;

    let service = DiagnosisService::new(state.db.clone());
    let history = service.history(user_id).await?;

    Ok(Json(HistoryResponse {
        success: true,
        history,
    }))
}
