use crate::api::{ApiClient, LocationApi};
use crate::cli::{Cli, DEFAULT_API_BASE, DEFAULT_TIMEOUT_MS};
use crate::services::adapters::{MapAdapter, TerminalMap};
use crate::services::config::load_config;
use crate::services::output::print_report;
use crate::services::report::{Effect, Event, ReportState};
use crate::services::validate;
use std::process::ExitCode;

pub fn handle_analyze(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config().unwrap_or_default();
    let api_base = cli
        .api_base
        .clone()
        .or(config.api_base)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    let timeout_ms = cli.timeout_ms.or(config.timeout_ms).unwrap_or(DEFAULT_TIMEOUT_MS);

    let api = ApiClient::new(&api_base, timeout_ms)?;
    let mut map = TerminalMap::default();
    let state = run_cycle(&cli.coordinates, &api, &mut map, cli.expand_details);

    print_report(cli.json, &state)?;
    if state.error.is_some() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// One full render cycle. Validation errors never reach the network; an
/// analysis error halts the cycle; an infrastructure error only omits that
/// section.
pub fn run_cycle(
    raw_coordinates: &str,
    api: &impl LocationApi,
    map: &mut impl MapAdapter,
    expand_details: bool,
) -> ReportState {
    let coordinate = match validate::parse(raw_coordinates) {
        Ok(c) => c,
        Err(e) => return ReportState::rejected(e.to_string()),
    };

    let mut state = ReportState::idle();
    apply_effects(state.apply(Event::Submit(coordinate)), map);

    match api.analyze(coordinate) {
        Ok(result) => {
            apply_effects(state.apply(Event::AnalysisLoaded(result)), map);
        }
        Err(err) => {
            apply_effects(state.apply(Event::AnalysisFailed(err)), map);
            return state;
        }
    }

    match api.fetch_context(coordinate) {
        Ok(context) => {
            apply_effects(state.apply(Event::InfrastructureLoaded(context)), map);
        }
        Err(err) => {
            tracing::warn!(error = %err, "infrastructure context unavailable, omitting section");
            apply_effects(state.apply(Event::InfrastructureFailed(err)), map);
        }
    }

    if expand_details {
        state.expand_all();
    }
    state
}

fn apply_effects(effects: Vec<Effect>, map: &mut impl MapAdapter) {
    for effect in effects {
        match effect {
            Effect::UpdateMarker {
                latitude,
                longitude,
            } => map.update(latitude, longitude),
            Effect::ScrollToBanner => tracing::debug!("banner brought into view"),
        }
    }
}
