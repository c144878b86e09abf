//! Diagnosis models: chatbot answers and the prediction result

use serde::{Deserialize, Serialize};

/// Number of questions in the assessment script
pub const QUESTION_COUNT: usize = 5;

/// The ordered answers collected by the assessment chatbot
///
/// One answer per fixed question: crop, affected part, color change,
/// texture, duration. The sequence is complete only when all five are
/// present, and answers are only ever appended in question order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChatbotAnswers(pub Vec<String>);

impl ChatbotAnswers {
    pub fn is_complete(&self) -> bool {
        self.0.len() >= QUESTION_COUNT
    }

    /// The crop answer (first question)
    pub fn crop(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Remaining answers joined into the free-text symptoms field
    pub fn symptoms(&self) -> String {
        self.0.iter().skip(1).cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Weather block embedded in a prediction result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherInfo {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub weather: String,
}

/// Satellite vegetation block embedded in a prediction result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SatelliteInfo {
    pub ndvi: f64,
    pub vegetation_health: String,
}

/// The structured payload returned by the prediction service
///
/// Confidence is a float in [0, 1] here and everywhere in storage; it is
/// only converted to a rounded integer percentage at display/hand-off time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub crop: String,
    pub symptoms: String,
    pub weather: WeatherInfo,
    pub satellite: SatelliteInfo,
    pub prediction: String,
    pub risk: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevention: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
}

impl PredictionResult {
    /// Confidence as a rounded integer percentage
    pub fn risk_score(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }

    /// Urgency label, falling back to the risk label when absent
    pub fn urgency_or_risk(&self) -> &str {
        self.urgency.as_deref().unwrap_or(&self.risk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PredictionResult {
        PredictionResult {
            crop: "Rice".to_string(),
            symptoms: "Leaves, Yellow/Yellowing".to_string(),
            weather: WeatherInfo {
                temperature: 27.5,
                humidity: 78.0,
                rainfall: 2.0,
                weather: "light rain".to_string(),
            },
            satellite: SatelliteInfo {
                ndvi: 0.62,
                vegetation_health: "Healthy vegetation".to_string(),
            },
            prediction: "Rice Blast".to_string(),
            risk: "High".to_string(),
            confidence: 0.87,
            treatment: None,
            prevention: None,
            urgency: None,
        }
    }

    #[test]
    fn answers_split_into_crop_and_symptoms() {
        let answers = ChatbotAnswers(vec![
            "Rice".to_string(),
            "Leaves".to_string(),
            "Yellow/Yellowing".to_string(),
            "Wilting/Drooping".to_string(),
            "Less than a week".to_string(),
        ]);
        assert!(answers.is_complete());
        assert_eq!(answers.crop(), Some("Rice"));
        assert_eq!(
            answers.symptoms(),
            "Leaves, Yellow/Yellowing, Wilting/Drooping, Less than a week"
        );
    }

    #[test]
    fn incomplete_answers() {
        let answers = ChatbotAnswers(vec!["Rice".to_string()]);
        assert!(!answers.is_complete());
        assert_eq!(answers.symptoms(), "");
    }

    #[test]
    fn risk_score_rounds_confidence() {
        let mut result = sample();
        assert_eq!(result.risk_score(), 87);
        result.confidence = 0.005;
        assert_eq!(result.risk_score(), 1);
        result.confidence = 1.0;
        assert_eq!(result.risk_score(), 100);
    }

    #[test]
    fn urgency_falls_back_to_risk() {
        let mut result = sample();
        assert_eq!(result.urgency_or_risk(), "High");
        result.urgency = Some("Immediate".to_string());
        assert_eq!(result.urgency_or_risk(), "Immediate");
    }

    #[test]
    fn optional_fields_roundtrip() {
        let result = sample();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("treatment").is_none());
        let back: PredictionResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
