//! Screen navigation with guard enforcement and stale-response discard

use crate::flow::heatmap::RegionRisk;
use crate::flow::results::{HeatmapPayload, TreatmentPayload};
use crate::guard::{self, GuardDecision, Screen};
use crate::session::SessionData;

/// Data carried into a screen by the navigation that opened it
#[derive(Debug, Clone, PartialEq)]
pub enum NavPayload {
    Heatmap(HeatmapPayload),
    Treatment(TreatmentPayload),
    /// Heatmap to Treatment hop for a searched region
    Region(RegionRisk),
}

/// Token identifying one navigation.
///
/// Async work started for a screen captures the token at launch and checks
/// it on completion. A response whose token no longer matches belongs to a
/// screen the user already left and must be dropped unapplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

pub struct Navigator {
    current: Screen,
    payload: Option<NavPayload>,
    generation: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: Screen::Login,
            payload: None,
            generation: 0,
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn payload(&self) -> Option<&NavPayload> {
        self.payload.as_ref()
    }

    pub fn generation(&self) -> Generation {
        Generation(self.generation)
    }

    /// Whether a captured token still refers to the current navigation
    pub fn is_current(&self, token: Generation) -> bool {
        token.0 == self.generation
    }

    /// Move to a screen, applying guards and payload requirements.
    ///
    /// Returns the screen actually entered, which differs from `target`
    /// when a guard redirects or a required payload is missing.
    pub fn navigate(
        &mut self,
        target: Screen,
        payload: Option<NavPayload>,
        data: &SessionData,
    ) -> Screen {
        let (target, payload) = match (target, payload) {
            // These screens only make sense with data handed over by
            // the screen that opened them
            (Screen::Heatmap | Screen::Treatment, None) => (Screen::Dashboard, None),
            (target, payload) => (target, payload),
        };
        // Guards run after the fallback so a fallback screen cannot be
        // entered with its own preconditions unmet. Every redirect target
        // satisfies its preconditions in the context that produced it.
        let (screen, payload) = match guard::evaluate(target, data) {
            GuardDecision::Redirect(producer) => (producer, None),
            GuardDecision::Proceed => (target, payload),
        };
        self.current = screen;
        self.payload = payload;
        self.generation += 1;
        self.current
    }
}
