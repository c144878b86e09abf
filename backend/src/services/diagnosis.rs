//! Diagnosis record storage and retrieval

use sqlx::PgPool;

use shared::validate_confidence;

use crate::error::{AppError, AppResult};

/// Diagnosis history service
#[derive(Clone)]
pub struct DiagnosisService {
    db: PgPool,
}

/// Input for saving one diagnosis record
#[derive(Debug)]
pub struct SaveDiagnosisInput {
    pub user_id: i64,
    pub crop: String,
    pub symptoms: String,
    pub prediction: String,
    pub risk: String,
    pub confidence: f64,
}

/// One history row as it goes on the wire
#[derive(Debug, sqlx::FromRow, serde::Serialize)]
pub struct HistoryRow {
    pub id: i64,
    pub date: String,
    pub disease: String,
    pub risk: String,
    pub confidence: f64,
}

impl DiagnosisService {
    /// Create a new DiagnosisService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Persist one diagnosis for a user
    pub async fn save(&self, input: SaveDiagnosisInput) -> AppResult<i64> {
        validate_confidence(input.confidence)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let user_exists =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE id = $1")
                .bind(input.user_id)
                .fetch_one(&self.db)
                .await?;
        if user_exists == 0 {
            return Err(AppError::Validation("Unknown user".to_string()));
        }

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO diagnoses (user_id, crop, symptoms, prediction, risk, confidence) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(input.user_id)
        .bind(&input.crop)
        .bind(&input.symptoms)
        .bind(&input.prediction)
        .bind(&input.risk)
        .bind(input.confidence)
        .fetch_one(&self.db)
        .await?;

        tracing::debug!(user_id = input.user_id, diagnosis_id = id, "diagnosis saved");
        Ok(id)
    }

    /// History rows for a user, newest first
    pub async fn history(&self, user_id: i64) -> AppResult<Vec<HistoryRow>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            "SELECT id, to_char(created_at, 'YYYY-MM-DD') AS date, prediction AS disease, \
             risk, confidence FROM diagnoses WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}
