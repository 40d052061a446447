//! Report state machine.
//!
//! The rendered report is an explicit state value. Each transition is a pure
//! function from (state, event) to (new state, effect list); side effects
//! (map updates, bringing the banner into view) are returned as values and
//! applied at the command boundary. Every cycle starts from a fully cleared
//! state, so repeating a cycle with identical responses yields an identical
//! final state.

use crate::api::RequestError;
use crate::domain::models::{AnalysisResult, Coordinate, InfrastructureContext};
use crate::services::classify::{
    self, BannerPresentation, InfraPresentation, Severity,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Loading,
    AnalysisError,
    AnalysisShown,
    InfrastructureShown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskPill {
    /// "category: risk_level" exactly as received.
    pub text: String,
    pub class: Severity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationCard {
    pub title: String,
    pub lines: Vec<String>,
    pub source_line: String,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub ward: String,
    pub region: Option<String>,
    pub pills: Vec<RiskPill>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfraCell {
    pub key: String,
    pub presentation: InfraPresentation,
    pub value: String,
}

#[derive(Debug)]
pub enum Event {
    Submit(Coordinate),
    AnalysisFailed(RequestError),
    AnalysisLoaded(AnalysisResult),
    InfrastructureFailed(RequestError),
    InfrastructureLoaded(InfrastructureContext),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    UpdateMarker { latitude: f64, longitude: f64 },
    ScrollToBanner,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportState {
    pub phase: Phase,
    pub trigger_enabled: bool,
    pub coordinate: Option<Coordinate>,
    pub error: Option<String>,
    pub region_info: Option<String>,
    pub summary: Option<Summary>,
    pub explanations: Vec<ExplanationCard>,
    pub sources: Vec<String>,
    pub infrastructure: Option<Vec<InfraCell>>,
    pub banner: Option<BannerPresentation>,
}

impl ReportState {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            trigger_enabled: true,
            coordinate: None,
            error: None,
            region_info: None,
            summary: None,
            explanations: Vec::new(),
            sources: Vec::new(),
            infrastructure: None,
            banner: None,
        }
    }

    /// Idle-equivalent state carrying a validation error; no request was
    /// issued, so the trigger stays enabled.
    pub fn rejected(message: String) -> Self {
        let mut state = Self::idle();
        state.error = Some(message);
        state
    }

    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Submit(coordinate) => {
                // Clear everything from the previous cycle before loading.
                *self = Self::idle();
                self.phase = Phase::Loading;
                self.trigger_enabled = false;
                self.coordinate = Some(coordinate);
                vec![Effect::UpdateMarker {
                    latitude: coordinate.latitude,
                    longitude: coordinate.longitude,
                }]
            }
            Event::AnalysisFailed(err) => {
                self.phase = Phase::AnalysisError;
                self.trigger_enabled = true;
                self.error = Some(err.user_message());
                self.region_info = err.region_info().map(str::to_string);
                Vec::new()
            }
            Event::AnalysisLoaded(result) => {
                self.phase = Phase::AnalysisShown;
                self.summary = Some(build_summary(&result));
                self.explanations = result
                    .explanations
                    .iter()
                    .map(|e| ExplanationCard {
                        title: e.category.clone(),
                        lines: e.text.clone(),
                        source_line: format!("Source: {} ({})", e.source, e.year),
                        open: false,
                    })
                    .collect();
                self.sources = result.data_sources.clone();
                Vec::new()
            }
            Event::InfrastructureFailed(_) => {
                // Supplementary data: degrade by omission, no user-facing error.
                self.trigger_enabled = true;
                Vec::new()
            }
            Event::InfrastructureLoaded(context) => {
                self.phase = Phase::InfrastructureShown;
                self.trigger_enabled = true;
                self.infrastructure = Some(
                    classify::INFRA_KEYS
                        .iter()
                        .map(|key| InfraCell {
                            key: (*key).to_string(),
                            presentation: classify::infra_presentation(key),
                            value: classify::display_value(context.value_for(key)),
                        })
                        .collect(),
                );
                self.banner = context
                    .overall_assessment
                    .as_ref()
                    .and_then(|a| classify::banner_presentation(&a.status, &a.reason));
                if self.banner.is_some() {
                    vec![Effect::ScrollToBanner]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Independent per-card toggle; no accordion exclusivity.
    #[allow(dead_code)] // Exercised by interactive frontends and tests
    pub fn toggle_explanation(&mut self, index: usize) {
        if let Some(card) = self.explanations.get_mut(index) {
            card.open = !card.open;
        }
    }

    pub fn expand_all(&mut self) {
        for card in &mut self.explanations {
            card.open = true;
        }
    }
}

fn build_summary(result: &AnalysisResult) -> Summary {
    // Blank ward strings count as missing, same as an absent field.
    let ward = match result.location.ward.as_deref() {
        Some(w) if !w.trim().is_empty() => w.to_string(),
        _ => "Unknown Ward".to_string(),
    };
    let region = match (&result.location.district, &result.location.state) {
        (Some(d), Some(s)) => Some(format!("{}, {}", d, s)),
        (Some(d), None) => Some(d.clone()),
        (None, Some(s)) => Some(s.clone()),
        (None, None) => None,
    };
    let pills = result
        .risk_tags
        .iter()
        .map(|tag| RiskPill {
            text: format!("{}: {}", tag.category, tag.risk_level),
            class: classify::severity_class(&tag.risk_level),
            hint: tag.description.clone(),
        })
        .collect();
    Summary {
        ward,
        region,
        pills,
    }
}
