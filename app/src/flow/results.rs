//! Result fan-out
//!
//! The results screen reads one stored `PredictionResult` and offers two
//! forward branches, each built by its own named mapper. The two mappers
//! apply different fallback policies on purpose: the heatmap branch
//! forwards treatment fields as-is and rounds confidence into a score,
//! while the treatment branch keeps confidence raw and substitutes fixed
//! fallback text for missing treatment advice. Keep them separate.

use serde::Serialize;

use shared::{Location, PredictionResult, WeatherInfo};

use crate::error::{AppError, AppResult};
use crate::session::{SessionStore, StorageBackend};

/// Shown when the prediction carries no treatment text
pub const FALLBACK_TREATMENT: &str =
    "Consult a local agricultural officer for appropriate treatment.";

/// Shown when the prediction carries no prevention steps
pub const FALLBACK_PREVENTION: [&str; 3] = [
    "Monitor crops regularly",
    "Maintain proper irrigation",
    "Ensure good field hygiene",
];

/// Hand-off to the heatmap screen
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeatmapPayload {
    pub latitude: f64,
    pub longitude: f64,
    pub crop: String,
    pub prediction: String,
    pub ndvi: f64,
    pub weather: WeatherInfo,
    /// Confidence as a rounded integer percentage
    pub risk_score: u32,
    pub treatment: Option<String>,
    pub prevention: Option<Vec<String>>,
    pub urgency: String,
}

/// Hand-off to the treatment screen
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TreatmentPayload {
    pub crop: String,
    pub prediction: String,
    /// Raw confidence in [0, 1], not rounded
    pub confidence: f64,
    pub treatment: String,
    pub prevention: Vec<String>,
    pub urgency: String,
    pub weather: WeatherInfo,
    pub ndvi: f64,
}

pub fn to_heatmap_payload(result: &PredictionResult, location: &Location) -> HeatmapPayload {
    HeatmapPayload {
        latitude: location.latitude,
        longitude: location.longitude,
        crop: result.crop.clone(),
        prediction: result.prediction.clone(),
        ndvi: result.satellite.ndvi,
        weather: result.weather.clone(),
        risk_score: result.risk_score(),
        treatment: result.treatment.clone(),
        prevention: result.prevention.clone(),
        urgency: result.urgency_or_risk().to_string(),
    }
}

pub fn to_treatment_payload(result: &PredictionResult) -> TreatmentPayload {
    TreatmentPayload {
        crop: result.crop.clone(),
        prediction: result.prediction.clone(),
        confidence: result.confidence,
        treatment: result
            .treatment
            .clone()
            .unwrap_or_else(|| FALLBACK_TREATMENT.to_string()),
        prevention: result.prevention.clone().unwrap_or_else(|| {
            FALLBACK_PREVENTION.iter().map(|s| s.to_string()).collect()
        }),
        urgency: result.urgency_or_risk().to_string(),
        weather: result.weather.clone(),
        ndvi: result.satellite.ndvi,
    }
}

pub struct ResultsFlow<'a, B: StorageBackend> {
    store: &'a SessionStore<B>,
}

impl<'a, B: StorageBackend> ResultsFlow<'a, B> {
    pub fn new(store: &'a SessionStore<B>) -> Self {
        Self { store }
    }

    pub fn prediction(&self) -> AppResult<PredictionResult> {
        self.store
            .load()?
            .prediction_result
            .ok_or(AppError::ConversationIncomplete)
    }

    /// Heatmap branch: aborts with a user-visible error when no location
    /// is stored, without navigating
    pub fn open_heatmap(&self) -> AppResult<HeatmapPayload> {
        let data = self.store.load()?;
        let result = data
            .prediction_result
            .as_ref()
            .ok_or(AppError::ConversationIncomplete)?;
        let location = data.location.as_ref().ok_or(AppError::LocationRequired)?;
        Ok(to_heatmap_payload(result, location))
    }

    pub fn open_treatment(&self) -> AppResult<TreatmentPayload> {
        let result = self.prediction()?;
        Ok(to_treatment_payload(&result))
    }
}
