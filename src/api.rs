use crate::domain::models::{
    AnalysisResult, Coordinate, InfrastructureContext, ServiceErrorBody,
};
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("failed to connect to analysis server")]
    ConnectionFailure,
    #[error("request rejected by server")]
    ServiceRejected(ServiceErrorBody),
}

impl RequestError {
    /// Message shown in the status area. A rejected request without a
    /// `message` field falls back to a generic line instead of crashing.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::ConnectionFailure => {
                "Failed to connect to analysis server.".to_string()
            }
            RequestError::ServiceRejected(body) => body
                .message
                .clone()
                .unwrap_or_else(|| "Analysis request failed.".to_string()),
        }
    }

    pub fn region_info(&self) -> Option<&str> {
        match self {
            RequestError::ServiceRejected(body) => body.supported_region_info.as_deref(),
            RequestError::ConnectionFailure => None,
        }
    }
}

/// Seam between orchestration and transport; the orchestration tests run
/// against an in-memory implementation.
pub trait LocationApi {
    fn analyze(&self, coordinate: Coordinate) -> Result<AnalysisResult, RequestError>;
    fn fetch_context(&self, coordinate: Coordinate)
        -> Result<InfrastructureContext, RequestError>;
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_ms: u64) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }
}

impl LocationApi for ApiClient {
    fn analyze(&self, coordinate: Coordinate) -> Result<AnalysisResult, RequestError> {
        let url = format!("{}/analyze-location", self.base_url);
        tracing::debug!(%url, "issuing analysis request");
        let resp = self
            .http
            .post(url)
            .json(&serde_json::json!({
                "latitude": coordinate.latitude,
                "longitude": coordinate.longitude,
            }))
            .send()
            .map_err(|_| RequestError::ConnectionFailure)?;
        if !resp.status().is_success() {
            let body = resp.json::<ServiceErrorBody>().unwrap_or_default();
            return Err(RequestError::ServiceRejected(body));
        }
        resp.json::<AnalysisResult>()
            .map_err(|_| RequestError::ConnectionFailure)
    }

    fn fetch_context(
        &self,
        coordinate: Coordinate,
    ) -> Result<InfrastructureContext, RequestError> {
        let url = format!("{}/infrastructure-context", self.base_url);
        tracing::debug!(%url, "issuing infrastructure request");
        let resp = self
            .http
            .get(url)
            .query(&[
                ("lat", coordinate.latitude),
                ("lon", coordinate.longitude),
            ])
            .send()
            .map_err(|_| RequestError::ConnectionFailure)?;
        if !resp.status().is_success() {
            let body = resp.json::<ServiceErrorBody>().unwrap_or_default();
            return Err(RequestError::ServiceRejected(body));
        }
        resp.json::<InfrastructureContext>()
            .map_err(|_| RequestError::ConnectionFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failure_has_fixed_user_message() {
        assert_eq!(
            RequestError::ConnectionFailure.user_message(),
            "Failed to connect to analysis server."
        );
    }

    #[test]
    fn rejection_without_message_falls_back_to_generic_line() {
        let err = RequestError::ServiceRejected(ServiceErrorBody::default());
        assert_eq!(err.user_message(), "Analysis request failed.");
        assert_eq!(err.region_info(), None);
    }

    #[test]
    fn rejection_surfaces_service_message_and_region_info() {
        let err = RequestError::ServiceRejected(ServiceErrorBody {
            status: Some("out_of_service_area".to_string()),
            message: Some("Location outside supported Kochi service area.".to_string()),
            supported_region_info: Some("Kochi Municipal Corporation".to_string()),
        });
        assert_eq!(
            err.user_message(),
            "Location outside supported Kochi service area."
        );
        assert_eq!(err.region_info(), Some("Kochi Municipal Corporation"));
    }
}
