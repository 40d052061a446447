use crate::domain::models::JsonOut;
use crate::services::classify::BannerTone;
use crate::services::report::ReportState;

pub const NO_SOURCES_PLACEHOLDER: &str = "No specific sources cited.";
pub const INFRA_SUBTITLE: &str =
    "What daily services and access look like around this location";
pub const INFRA_FOOTER: &str =
    "Indicators are based on available spatial and contextual datasets. Availability may vary over time.";

pub fn print_report(json: bool, state: &ReportState) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: state.error.is_none(),
                data: state,
            })?
        );
    } else {
        println!("{}", render_text(state));
    }
    Ok(())
}

/// Render the report as terminal text. The banner comes first, the terminal
/// analog of scrolling it into view.
pub fn render_text(state: &ReportState) -> String {
    let mut out: Vec<String> = Vec::new();

    if let Some(banner) = &state.banner {
        let glyph = match banner.tone {
            BannerTone::Danger => "!!",
            BannerTone::Safe => "ok",
        };
        out.push(format!("[{}] {}", glyph, banner.title));
        out.push(banner.body.to_string());
        for reason in &banner.reasons {
            out.push(format!("  - {}", reason));
        }
        out.push(banner.disclaimer.to_string());
        out.push(String::new());
    }

    if let Some(err) = &state.error {
        out.push(format!("error: {}", err));
        if let Some(info) = &state.region_info {
            out.push(info.clone());
        }
    }

    if let Some(summary) = &state.summary {
        match &summary.region {
            Some(region) => out.push(format!("Ward: {} ({})", summary.ward, region)),
            None => out.push(format!("Ward: {}", summary.ward)),
        }
        for pill in &summary.pills {
            out.push(format!("  [{}] {}", pill.class.as_class(), pill.text));
        }

        if !state.explanations.is_empty() {
            out.push(String::new());
            out.push("Details".to_string());
            for card in &state.explanations {
                if card.open {
                    out.push(format!("v {}", card.title));
                    for line in &card.lines {
                        out.push(format!("    - {}", line));
                    }
                    out.push(format!("    {}", card.source_line));
                } else {
                    out.push(format!("> {}", card.title));
                }
            }
        }

        out.push(String::new());
        out.push("Data sources".to_string());
        if state.sources.is_empty() {
            out.push(format!("  {}", NO_SOURCES_PLACEHOLDER));
        } else {
            for source in &state.sources {
                out.push(format!("  - {}", source));
            }
        }
    }

    if let Some(grid) = &state.infrastructure {
        out.push(String::new());
        out.push("Infrastructure".to_string());
        out.push(INFRA_SUBTITLE.to_string());
        for cell in grid {
            out.push(format!("  {:<12} {}", cell.presentation.label, cell.value));
        }
        out.push(INFRA_FOOTER.to_string());
    }

    out.join("\n")
}
