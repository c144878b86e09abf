//! Pipeline hand-off tests
//!
//! End-to-end checks of the session store, guard table, navigator, and the
//! result fan-out mappers working together across the public API.

use proptest::prelude::*;

use shared::{
    ChatbotAnswers, Location, PredictionResult, SatelliteInfo, Session, WeatherInfo,
};

use wefarm_app::flow::heatmap::heat_points;
use wefarm_app::flow::results::{to_heatmap_payload, to_treatment_payload};
use wefarm_app::guard::{evaluate, GuardDecision, Screen};
use wefarm_app::navigation::{NavPayload, Navigator};
use wefarm_app::session::{MemoryBackend, SessionStore};

fn prediction(confidence: f64) -> PredictionResult {
    PredictionResult {
        crop: "Tomato".to_string(),
        symptoms: "Leaves, Yellow/Yellowing, Curling leaves, Less than a week".to_string(),
        weather: WeatherInfo {
            temperature: 29.0,
            humidity: 72.0,
            rainfall: 0.8,
            weather: "overcast".to_string(),
        },
        satellite: SatelliteInfo {
            ndvi: 0.41,
            vegetation_health: "Stressed".to_string(),
        },
        prediction: "Tomato Leaf Curl".to_string(),
        risk: "Medium".to_string(),
        confidence,
        treatment: None,
        prevention: None,
        urgency: None,
    }
}

fn populated_store() -> SessionStore<MemoryBackend> {
    let store = SessionStore::new(MemoryBackend::default());
    store.login("farmer1", "42").unwrap();
    store.set_location(Location::new(19.07, 72.87)).unwrap();
    store
        .set_chatbot_answers(ChatbotAnswers(vec![
            "Tomato".to_string(),
            "Leaves".to_string(),
            "Yellow/Yellowing".to_string(),
            "Curling leaves".to_string(),
            "Less than a week".to_string(),
        ]))
        .unwrap();
    store.set_prediction_result(prediction(0.87)).unwrap();
    store
}

// ============================================================================
// Logout and guards
// ============================================================================

#[test]
fn logout_clears_every_field_and_relocks_all_screens() {
    let store = populated_store();

    store.clear().unwrap();

    let data = store.load().unwrap();
    assert_eq!(data.session, Session::default());
    assert!(data.location.is_none());
    assert!(data.chatbot_answers.is_none());
    assert!(data.prediction_result.is_none());
    assert!(data.diagnosis_history.is_empty());

    for screen in [
        Screen::Location,
        Screen::Home,
        Screen::Weather,
        Screen::Satellite,
        Screen::Chatbot,
        Screen::Results,
        Screen::Heatmap,
        Screen::Treatment,
        Screen::Dashboard,
        Screen::Feedback,
    ] {
        assert_eq!(evaluate(screen, &data), GuardDecision::Redirect(Screen::Login));
    }
}

#[test]
fn missing_location_redirects_before_any_fetch() {
    let store = SessionStore::new(MemoryBackend::default());
    store.login("farmer1", "42").unwrap();
    let data = store.load().unwrap();

    for screen in [Screen::Weather, Screen::Satellite, Screen::Home, Screen::Dashboard] {
        assert_eq!(evaluate(screen, &data), GuardDecision::Redirect(Screen::Location));
    }
}

// ============================================================================
// Result fan-out divergence
// ============================================================================

#[test]
fn fan_out_branches_diverge_on_confidence_handling() {
    let source = prediction(0.87);
    let location = Location::new(19.07, 72.87);

    let heatmap = to_heatmap_payload(&source, &location);
    let treatment = to_treatment_payload(&source);

    assert_eq!(heatmap.risk_score, 87);
    assert_eq!(treatment.confidence, 0.87);
    assert_eq!(heatmap.urgency, "Medium");
    assert_eq!(treatment.urgency, "Medium");
}

proptest! {
    /// The heatmap branch rounds, the treatment branch never does
    #[test]
    fn risk_score_is_rounded_percentage(confidence in 0.0f64..=1.0) {
        let source = prediction(confidence);
        let location = Location::new(19.07, 72.87);

        let heatmap = to_heatmap_payload(&source, &location);
        prop_assert_eq!(heatmap.risk_score, (confidence * 100.0).round() as u32);
        prop_assert!(heatmap.risk_score <= 100);

        let treatment = to_treatment_payload(&source);
        prop_assert_eq!(treatment.confidence, confidence);
    }
}

// ============================================================================
// Heat point generation
// ============================================================================

#[test]
fn heat_points_are_the_fixed_six_point_fan() {
    let points = heat_points(shared::Coordinates::new(10.0, 76.0));
    let expected = [
        (0.0, 0.0, 0.85),
        (0.0009, 0.0028, 0.7),
        (-0.0006, 0.0038, 0.6),
        (0.0014, 0.0048, 0.5),
        (0.0028, 0.0012, 0.55),
        (-0.0009, -0.0018, 0.4),
    ];
    assert_eq!(points.len(), expected.len());
    for (point, (dlat, dlon, intensity)) in points.iter().zip(expected) {
        assert!((point.latitude - (10.0 + dlat)).abs() < 1e-9);
        assert!((point.longitude - (76.0 + dlon)).abs() < 1e-9);
        assert_eq!(point.intensity, intensity);
    }
}

// ============================================================================
// Navigation generations
// ============================================================================

#[test]
fn superseded_fetches_are_detectable_by_generation() {
    let store = populated_store();
    let data = store.load().unwrap();
    let mut nav = Navigator::new();

    nav.navigate(Screen::Weather, None, &data);
    let weather_fetch = nav.generation();

    // user leaves before the fetch resolves
    nav.navigate(Screen::Dashboard, None, &data);
    assert!(!nav.is_current(weather_fetch));

    let dashboard_fetch = nav.generation();
    assert!(nav.is_current(dashboard_fetch));
}

#[test]
fn results_carry_payloads_forward_by_navigation_not_storage() {
    let store = populated_store();
    let data = store.load().unwrap();
    let source = data.prediction_result.clone().unwrap();
    let location = data.location.clone().unwrap();
    let mut nav = Navigator::new();

    let entered = nav.navigate(
        Screen::Heatmap,
        Some(NavPayload::Heatmap(to_heatmap_payload(&source, &location))),
        &data,
    );
    assert_eq!(entered, Screen::Heatmap);
    match nav.payload() {
        Some(NavPayload::Heatmap(payload)) => assert_eq!(payload.risk_score, 87),
        other => panic!("unexpected payload: {:?}", other),
    }

    let entered = nav.navigate(
        Screen::Treatment,
        Some(NavPayload::Treatment(to_treatment_payload(&source))),
        &data,
    );
    assert_eq!(entered, Screen::Treatment);
}
