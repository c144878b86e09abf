//! Scripted diagnosis conversation
//!
//! A strictly linear five-question script. The flow only ever exposes the
//! current question, so answers cannot arrive out of order and a finished
//! conversation cannot be reopened.

use std::time::Duration;

use shared::{ChatbotAnswers, Coordinates, PredictionResult, QUESTION_COUNT};

use crate::error::{AppError, AppResult};
use crate::external::account::SaveDiagnosisRequest;
use crate::external::prediction::PredictRequest;
use crate::external::{AccountClient, PredictionClient};
use crate::flow::location::DEFAULT_COORDINATES;
use crate::session::{SessionData, SessionStore, StorageBackend};

/// Pause before the next question is revealed, for chat pacing only
pub const TURN_DELAY: Duration = Duration::from_millis(500);
/// Pause between the analysis completing and the result being handed back
pub const RESULTS_DELAY: Duration = Duration::from_millis(1500);

pub struct ChatQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

/// The fixed script, in asking order
pub static QUESTIONS: [ChatQuestion; QUESTION_COUNT] = [
    ChatQuestion {
        prompt: "Hello! I'm WeFarm Assistant. What type of crop are you growing?",
        options: &[
            "Rice",
            "Wheat",
            "Corn/Maize",
            "Cotton",
            "Tomato",
            "Potato",
            "Sugarcane",
            "Other",
        ],
    },
    ChatQuestion {
        prompt: "Which part of the plant is showing symptoms?",
        options: &[
            "Leaves",
            "Stems",
            "Roots",
            "Fruits/Grains",
            "Flowers",
            "Entire plant",
        ],
    },
    ChatQuestion {
        prompt: "What color changes have you noticed on the affected parts?",
        options: &[
            "Yellow/Yellowing",
            "Brown spots",
            "Black spots",
            "White patches",
            "Red/Purple",
            "No color change",
        ],
    },
    ChatQuestion {
        prompt: "Describe the texture or appearance of the affected area:",
        options: &[
            "Wilting/Drooping",
            "Curling leaves",
            "Powdery coating",
            "Wet/Slimy rot",
            "Dry/Crispy",
            "Holes or eaten areas",
        ],
    },
    ChatQuestion {
        prompt: "How long have you noticed these symptoms?",
        options: &[
            "Just appeared (1-2 days)",
            "Less than a week",
            "1-2 weeks",
            "More than 2 weeks",
        ],
    },
];

/// Build the prediction request from a completed answer sequence.
///
/// The first answer is the crop; the rest join into the symptom text.
pub fn build_predict_request(answers: &ChatbotAnswers, coords: Coordinates) -> PredictRequest {
    PredictRequest {
        crop: answers.crop().unwrap_or_default().to_string(),
        symptoms: answers.symptoms(),
        latitude: coords.latitude,
        longitude: coords.longitude,
    }
}

/// History is saved only for accounts the server knows about
pub fn should_save_history(data: &SessionData) -> bool {
    data.session.user_id.is_some()
}

pub struct ChatbotFlow<'a, B: StorageBackend> {
    prediction: &'a PredictionClient,
    account: &'a AccountClient,
    store: &'a SessionStore<B>,
    answers: Vec<String>,
}

impl<'a, B: StorageBackend> ChatbotFlow<'a, B> {
    pub fn new(
        prediction: &'a PredictionClient,
        account: &'a AccountClient,
        store: &'a SessionStore<B>,
    ) -> Self {
        Self {
            prediction,
            account,
            store,
            answers: Vec::new(),
        }
    }

    /// The question awaiting an answer, or None once the script is done
    pub fn current_question(&self) -> Option<&'static ChatQuestion> {
        QUESTIONS.get(self.answers.len())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTION_COUNT
    }

    /// Record the chosen option and advance.
    ///
    /// Returns the next question after a short typing pause, or None once
    /// the fifth answer lands and the full sequence has been persisted.
    /// Selections after completion are ignored.
    pub async fn select_option(&mut self, option: &str) -> AppResult<Option<&'static ChatQuestion>> {
        if self.is_complete() {
            return Ok(None);
        }
        self.answers.push(option.to_string());
        if self.is_complete() {
            self.store
                .set_chatbot_answers(ChatbotAnswers(self.answers.clone()))?;
            return Ok(None);
        }
        tokio::time::sleep(TURN_DELAY).await;
        Ok(self.current_question())
    }

    /// Submit the finished conversation to the prediction service.
    ///
    /// Stores the result for the results screen and holds it back for
    /// `RESULTS_DELAY` so the analysis step stays visible. The history save
    /// is best-effort and only attempted when a user id exists; its failure
    /// never blocks the diagnosis.
    pub async fn submit(&self) -> AppResult<PredictionResult> {
        if !self.is_complete() {
            return Err(AppError::ConversationIncomplete);
        }

        let data = self.store.load()?;
        let coords = data
            .location
            .as_ref()
            .map(|l| l.coordinates())
            .unwrap_or(DEFAULT_COORDINATES);
        let answers = ChatbotAnswers(self.answers.clone());
        let request = build_predict_request(&answers, coords);

        let result = self.prediction.predict(&request).await?;
        self.store.set_prediction_result(result.clone())?;

        if should_save_history(&data) {
            self.save_history(&data, &result).await;
        }

        tokio::time::sleep(RESULTS_DELAY).await;
        Ok(result)
    }

    async fn save_history(&self, data: &SessionData, result: &PredictionResult) {
        let Some(user_id) = data.session.user_id.as_deref() else {
            return;
        };
        let Ok(user_id) = user_id.parse::<i64>() else {
            tracing::warn!(user_id, "stored user id is not numeric, skipping history save");
            return;
        };
        let request = SaveDiagnosisRequest {
            user_id,
            crop: result.crop.clone(),
            symptoms: result.symptoms.clone(),
            prediction: result.prediction.clone(),
            risk: result.risk.clone(),
            confidence: result.confidence,
        };
        if let Err(err) = self.account.save_diagnosis(&request).await {
            tracing::warn!(error = %err, "history save failed, continuing without it");
        }
    }
}
