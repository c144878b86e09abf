//! Dashboard, diagnosis history, and feedback
//!
//! History comes from exactly one source per user: the server when a user
//! id exists, the legacy local cache otherwise. The two are never merged.

use shared::{DiagnosisHistoryEntry, FeedbackEntry, Severity, WeatherReport};

use crate::error::AppResult;
use crate::external::{AccountClient, WeatherClient};
use crate::session::{SessionStore, StorageBackend};

pub struct DashboardFlow<'a, B: StorageBackend> {
    account: &'a AccountClient,
    weather: &'a WeatherClient,
    store: &'a SessionStore<B>,
}

impl<'a, B: StorageBackend> DashboardFlow<'a, B> {
    pub fn new(
        account: &'a AccountClient,
        weather: &'a WeatherClient,
        store: &'a SessionStore<B>,
    ) -> Self {
        Self {
            account,
            weather,
            store,
        }
    }

    /// Weather card for the stored location.
    ///
    /// Unlike the weather screen, this card shows nothing on failure
    /// instead of the fallback record.
    pub async fn weather_summary(&self) -> AppResult<Option<WeatherReport>> {
        let data = self.store.load()?;
        let Some(location) = data.location else {
            return Ok(None);
        };
        match self
            .weather
            .current_weather(location.latitude, location.longitude)
            .await
        {
            Ok(report) => Ok(Some(report)),
            Err(err) => {
                tracing::warn!(error = %err, "dashboard weather fetch failed");
                Ok(None)
            }
        }
    }

    /// Diagnosis history rows, newest first
    pub async fn history(&self) -> AppResult<Vec<DiagnosisHistoryEntry>> {
        let data = self.store.load()?;
        let Some(user_id) = data.session.user_id.as_deref() else {
            return Ok(data.diagnosis_history);
        };
        let Ok(user_id) = user_id.parse::<i64>() else {
            tracing::warn!(user_id, "stored user id is not numeric, using local cache");
            return Ok(data.diagnosis_history);
        };

        match self.account.get_history(user_id).await {
            Ok(response) if response.success => Ok(response
                .history
                .into_iter()
                .map(|row| DiagnosisHistoryEntry {
                    id: row.id.to_string(),
                    date: row.date,
                    disease: row.disease,
                    severity: Severity::from_risk_label(Some(&row.risk)),
                    confidence: row.confidence,
                })
                .collect()),
            Ok(_) => Ok(Vec::new()),
            Err(err) => {
                tracing::warn!(error = %err, "history fetch failed");
                Ok(Vec::new())
            }
        }
    }

    /// Empties only the legacy local cache, never server rows
    pub fn clear_local_history(&self) -> AppResult<()> {
        self.store.clear_history_cache()?;
        Ok(())
    }

    pub fn submit_feedback(&self, rating: u8, comment: &str) -> AppResult<()> {
        let data = self.store.load()?;
        let entry = FeedbackEntry {
            username: data.session.display_name().to_string(),
            rating,
            comment: comment.to_string(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        };
        self.store.push_feedback(entry)?;
        Ok(())
    }

    /// Drops the previous conversation so the chatbot starts clean
    pub fn start_new_diagnosis(&self) -> AppResult<()> {
        self.store.clear_chatbot_answers()?;
        Ok(())
    }
}
