use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Validated latitude/longitude pair. Only `services::validate::parse`
/// constructs one, so every downstream consumer can rely on the ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub location: LocationInfo,
    #[serde(default)]
    pub risk_tags: Vec<RiskTag>,
    #[serde(default)]
    pub explanations: Vec<Explanation>,
    #[serde(default)]
    pub data_sources: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct LocationInfo {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    pub ward: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RiskTag {
    pub category: String,
    pub risk_level: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Explanation {
    pub category: String,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub year: YearField,
}

/// The service emits `year` as a string, but the field is allowed to arrive
/// as a bare number too.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum YearField {
    Text(String),
    Number(i64),
}

impl Default for YearField {
    fn default() -> Self {
        YearField::Text(String::new())
    }
}

impl fmt::Display for YearField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearField::Text(s) => f.write_str(s),
            YearField::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct InfrastructureContext {
    pub network: Option<String>,
    pub water: Option<String>,
    pub healthcare: Option<String>,
    pub fire_rescue: Option<String>,
    pub density: Option<String>,
    pub sanitation: Option<String>,
    pub daily_services: Option<String>,
    #[serde(default)]
    pub overall_assessment: Option<OverallAssessment>,
}

impl InfrastructureContext {
    /// Raw value for a category key; unknown keys read as absent.
    pub fn value_for(&self, key: &str) -> Option<&str> {
        match key {
            "network" => self.network.as_deref(),
            "water" => self.water.as_deref(),
            "healthcare" => self.healthcare.as_deref(),
            "fire_rescue" => self.fire_rescue.as_deref(),
            "density" => self.density.as_deref(),
            "sanitation" => self.sanitation.as_deref(),
            "daily_services" => self.daily_services.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OverallAssessment {
    pub status: String,
    #[serde(default)]
    pub reason: Vec<String>,
}

/// Error body the analysis endpoint returns on non-success statuses.
/// Every field is optional; an empty body must still deserialize.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub supported_region_info: Option<String>,
}
