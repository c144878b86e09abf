//! Session storage backends and the typed store facade

use std::path::PathBuf;
use std::sync::Mutex;

use shared::{ChatbotAnswers, DiagnosisHistoryEntry, FeedbackEntry, Location, PredictionResult};

use crate::error::{AppError, AppResult};
use crate::session::SessionData;

/// Raw storage for the serialized session record
pub trait StorageBackend: Send + Sync {
    fn read(&self) -> AppResult<Option<String>>;
    fn write(&self, raw: &str) -> AppResult<()>;
}

/// Ephemeral backend for tests
#[derive(Default)]
pub struct MemoryBackend {
    raw: Mutex<Option<String>>,
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> AppResult<Option<String>> {
        Ok(self
            .raw
            .lock()
            .map_err(|_| AppError::Storage("session lock poisoned".to_string()))?
            .clone())
    }

    fn write(&self, raw: &str) -> AppResult<()> {
        *self
            .raw
            .lock()
            .map_err(|_| AppError::Storage("session lock poisoned".to_string()))? =
            Some(raw.to_string());
        Ok(())
    }
}

/// Durable backend: one JSON file that survives restarts until cleared
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> AppResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, raw: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// Typed facade over a storage backend
pub struct SessionStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load the current session record, defaulting when none is stored
    pub fn load(&self) -> AppResult<SessionData> {
        match self.backend.read()? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(SessionData::default()),
        }
    }

    pub fn save(&self, data: &SessionData) -> AppResult<()> {
        let raw = serde_json::to_string(data)?;
        self.backend.write(&raw)
    }

    /// Read-modify-write helper for single-field mutations
    pub fn update<F>(&self, mutate: F) -> AppResult<SessionData>
    where
        F: FnOnce(&mut SessionData),
    {
        let mut data = self.load()?;
        mutate(&mut data);
        self.save(&data)?;
        Ok(data)
    }

    /// Record a successful login
    pub fn login(&self, username: &str, user_id: &str) -> AppResult<SessionData> {
        self.update(|data| {
            data.session = shared::Session::logged_in(username, user_id);
        })
    }

    pub fn set_location(&self, location: Location) -> AppResult<SessionData> {
        self.update(|data| data.location = Some(location))
    }

    pub fn set_chatbot_answers(&self, answers: ChatbotAnswers) -> AppResult<SessionData> {
        self.update(|data| data.chatbot_answers = Some(answers))
    }

    /// Clear the answer sequence when the user starts a new diagnosis
    pub fn clear_chatbot_answers(&self) -> AppResult<SessionData> {
        self.update(|data| data.chatbot_answers = None)
    }

    pub fn set_prediction_result(&self, result: PredictionResult) -> AppResult<SessionData> {
        self.update(|data| data.prediction_result = Some(result))
    }

    pub fn set_history_cache(
        &self,
        entries: Vec<DiagnosisHistoryEntry>,
    ) -> AppResult<SessionData> {
        self.update(|data| data.diagnosis_history = entries)
    }

    /// Empty only the legacy local history cache
    pub fn clear_history_cache(&self) -> AppResult<SessionData> {
        self.update(|data| data.diagnosis_history.clear())
    }

    pub fn push_feedback(&self, entry: FeedbackEntry) -> AppResult<SessionData> {
        self.update(|data| data.feedback.push(entry))
    }

    /// Logout: reset every field together.
    ///
    /// Session, location, chatbot answers, prediction result, and the
    /// history cache all clear in one write.
    pub fn clear(&self) -> AppResult<()> {
        self.save(&SessionData::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_defaults_when_empty() {
        let store = SessionStore::new(MemoryBackend::default());
        let data = store.load().unwrap();
        assert_eq!(data, SessionData::default());
        assert!(!data.is_logged_in());
    }

    #[test]
    fn login_then_clear_resets_everything() {
        let store = SessionStore::new(MemoryBackend::default());
        store.login("farmer1", "u-1").unwrap();
        store.set_location(Location::new(19.07, 72.87)).unwrap();
        store
            .set_chatbot_answers(ChatbotAnswers(vec!["Rice".to_string()]))
            .unwrap();

        let data = store.load().unwrap();
        assert!(data.is_logged_in());
        assert!(data.has_location());

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), SessionData::default());
    }

    #[test]
    fn clear_history_cache_leaves_session() {
        let store = SessionStore::new(MemoryBackend::default());
        store.login("farmer1", "u-1").unwrap();
        store
            .set_history_cache(vec![DiagnosisHistoryEntry {
                id: "1".to_string(),
                date: "2024-01-01".to_string(),
                disease: "Rice Blast".to_string(),
                severity: shared::Severity::High,
                confidence: 87.0,
            }])
            .unwrap();

        let data = store.clear_history_cache().unwrap();
        assert!(data.diagnosis_history.is_empty());
        assert!(data.is_logged_in());
    }
}
