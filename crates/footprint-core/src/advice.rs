// crates/footprint-core/src/advice.rs

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FootprintError, Result};
use crate::types::Breakdown;

/// Wire request: the weekly-equivalent total and weekly breakdown.
#[derive(Debug, Serialize)]
struct AdviceRequest<'a> {
    total: f64,
    breakdown: &'a Breakdown,
}

// Any other response shape is an `AdviceResponse` error.
#[derive(Debug, Deserialize)]
struct AdviceResponse {
    advice: String,
}

/// Client for the external advice endpoint.
pub struct AdviceClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AdviceClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Posts the weekly total and breakdown, returning the server-supplied
    /// free text. A reachable endpoint that sends no advice degrades to a
    /// placeholder line rather than an error.
    pub async fn request_advice(
        &self,
        total_weekly: f64,
        parts_weekly: &Breakdown,
    ) -> Result<String> {
        debug!(total_weekly, endpoint = %self.endpoint, "requesting advice");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&AdviceRequest {
                total: total_weekly,
                breakdown: parts_weekly,
            })
            .send()
            .await?
            .error_for_status()?;

        let body: AdviceResponse = response
            .json()
            .await
            .map_err(|err| FootprintError::AdviceResponse(err.to_string()))?;

        if body.advice.trim().is_empty() {
            Ok("No advice returned.".to_string())
        } else {
            Ok(body.advice)
        }
    }
}

/// Tags advice requests with a monotonically increasing id so that only the
/// most recently issued request's response is ever applied; a completion for
/// a superseded id must be discarded by the caller.
#[derive(Debug, Default)]
pub struct AdviceSequencer {
    latest: AtomicU64,
}

impl AdviceSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next request id, superseding all earlier ones.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True while `id` is still the latest issued request.
    pub fn is_current(&self, id: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == id
    }
}
