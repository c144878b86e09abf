//! Centralized screen access rules
//!
//! Every screen's preconditions live in one table. Navigation asks the
//! table before entering a screen instead of each screen re-checking
//! session state on its own.

use crate::session::SessionData;

/// Every navigable screen in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Location,
    Home,
    Weather,
    Satellite,
    Chatbot,
    Results,
    Heatmap,
    Treatment,
    Dashboard,
    Feedback,
}

/// A requirement a screen places on the session record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    LoggedIn,
    HasLocation,
    HasPrediction,
}

impl Precondition {
    fn holds(self, data: &SessionData) -> bool {
        match self {
            Precondition::LoggedIn => data.is_logged_in(),
            Precondition::HasLocation => data.has_location(),
            Precondition::HasPrediction => data.has_prediction(),
        }
    }

    /// The screen that can produce this precondition
    pub fn producer(self) -> Screen {
        match self {
            Precondition::LoggedIn => Screen::Login,
            Precondition::HasLocation => Screen::Location,
            Precondition::HasPrediction => Screen::Chatbot,
        }
    }
}

/// Preconditions for entering a screen, in check order
pub fn preconditions(screen: Screen) -> &'static [Precondition] {
    use Precondition::*;
    match screen {
        Screen::Login => &[],
        Screen::Location => &[LoggedIn],
        Screen::Home | Screen::Weather | Screen::Satellite | Screen::Dashboard => {
            &[LoggedIn, HasLocation]
        }
        Screen::Chatbot => &[LoggedIn],
        Screen::Results => &[LoggedIn, HasPrediction],
        Screen::Heatmap | Screen::Treatment | Screen::Feedback => &[LoggedIn],
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    /// First unmet precondition's producer screen
    Redirect(Screen),
}

/// Evaluate a screen's preconditions against the session record
pub fn evaluate(screen: Screen, data: &SessionData) -> GuardDecision {
    for pre in preconditions(screen) {
        if !pre.holds(data) {
            return GuardDecision::Redirect(pre.producer());
        }
    }
    GuardDecision::Proceed
}
