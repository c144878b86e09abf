//! Typed session store
//!
//! All cross-screen state lives in one explicit record instead of an
//! ambient key/value bag. Every mutation rewrites the whole record through
//! the backing storage, so `clear` resets every field in one step and a
//! partial clear cannot happen.

mod store;

pub use store::{FileBackend, MemoryBackend, SessionStore, StorageBackend};

use serde::{Deserialize, Serialize};
use shared::{
    ChatbotAnswers, DiagnosisHistoryEntry, FeedbackEntry, Location, PredictionResult, Session,
};

/// Everything the pipeline persists between screens
///
/// Field lifecycle: each field is set by the screen that produces it and
/// read by later screens. Logout resets the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionData {
    pub session: Session,
    pub location: Option<Location>,
    pub chatbot_answers: Option<ChatbotAnswers>,
    pub prediction_result: Option<PredictionResult>,
    /// Legacy local history cache, used only when no user id is stored
    pub diagnosis_history: Vec<DiagnosisHistoryEntry>,
    pub feedback: Vec<FeedbackEntry>,
}

impl SessionData {
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in
    }

    pub fn has_location(&self) -> bool {
        self.location.is_some()
    }

    pub fn has_prediction(&self) -> bool {
        self.prediction_result.is_some()
    }
}
