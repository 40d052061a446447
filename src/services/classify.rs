//! Total classification-to-presentation lookups. Every function here must
//! return a defined value for arbitrary input; unknown categories and
//! statuses take the explicit default branch, never a panic.

use serde::Serialize;

pub const INFO_UNAVAILABLE: &str = "Info Unavailable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn as_class(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }
}

/// Map a raw risk level onto a pill severity class, case-insensitively.
/// Unrecognized levels fall back to `Low`.
pub fn severity_class(risk_level: &str) -> Severity {
    match risk_level.trim().to_ascii_uppercase().as_str() {
        "HIGH" | "CRITICAL" => Severity::High,
        "MODERATE" | "SEMI-CRITICAL" => Severity::Moderate,
        _ => Severity::Low,
    }
}

/// Infrastructure grid keys in display order.
pub const INFRA_KEYS: [&str; 7] = [
    "network",
    "water",
    "healthcare",
    "fire_rescue",
    "density",
    "sanitation",
    "daily_services",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfraPresentation {
    pub label: &'static str,
    pub icon: &'static str,
    pub badge_color_class: &'static str,
    pub value_color_class: &'static str,
}

/// Fixed presentation table for the seven recognized infrastructure keys.
/// Value color is keyed by category, not by value content.
pub fn infra_presentation(key: &str) -> InfraPresentation {
    match key {
        "network" => InfraPresentation {
            label: "NETWORK",
            icon: "wifi",
            badge_color_class: "bg-blue-soft",
            value_color_class: "text-amber",
        },
        "water" => InfraPresentation {
            label: "WATER",
            icon: "droplet",
            badge_color_class: "bg-teal-soft",
            value_color_class: "text-neutral",
        },
        "healthcare" => InfraPresentation {
            label: "HEALTHCARE",
            icon: "cross",
            badge_color_class: "bg-green-soft",
            value_color_class: "text-green",
        },
        "fire_rescue" => InfraPresentation {
            label: "EMERGENCY",
            icon: "flame",
            badge_color_class: "bg-orange-soft",
            value_color_class: "text-green",
        },
        "density" => InfraPresentation {
            label: "DENSITY",
            icon: "people",
            badge_color_class: "bg-purple-soft",
            value_color_class: "text-neutral",
        },
        "sanitation" => InfraPresentation {
            label: "SANITATION",
            icon: "pipeline",
            badge_color_class: "bg-gray-soft",
            value_color_class: "text-amber",
        },
        "daily_services" => InfraPresentation {
            label: "DAILY ACCESS",
            icon: "cart",
            badge_color_class: "bg-teal-soft",
            value_color_class: "text-amber",
        },
        _ => InfraPresentation {
            label: "OTHER",
            icon: "dot",
            badge_color_class: "bg-gray-soft",
            value_color_class: "text-neutral",
        },
    }
}

/// Replace absent or blank values with the fixed placeholder before display.
pub fn display_value(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => INFO_UNAVAILABLE.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerTone {
    Danger,
    Safe,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerPresentation {
    pub tone: BannerTone,
    pub title: &'static str,
    pub body: &'static str,
    pub disclaimer: &'static str,
    pub reasons: Vec<String>,
}

/// Banner presentation for an overall-assessment status. `None` means the
/// banner section stays hidden; unknown statuses take that branch silently.
pub fn banner_presentation(status: &str, reasons: &[String]) -> Option<BannerPresentation> {
    match status {
        "high_constraint" => Some(BannerPresentation {
            tone: BannerTone::Danger,
            title: "High-Risk Location Identified",
            body: "This location shows multiple critical environmental or disaster-related constraints.",
            disclaimer: "This assessment is based on available historical and spatial data. It does not predict future events and should be used for awareness only.",
            reasons: reasons.to_vec(),
        }),
        "normal_context" => Some(BannerPresentation {
            tone: BannerTone::Safe,
            title: "Low Constraint Zone",
            body: "No significant critical environmental constraints detected in this sector.",
            disclaimer: "Based on available spatial context. Suitable for general development subject to local regulations.",
            reasons: Vec::new(),
        }),
        _ => None,
    }
}
