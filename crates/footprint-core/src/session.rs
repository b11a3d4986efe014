// crates/footprint-core/src/session.rs

use chrono::Utc;
use tracing::{debug, info};

use crate::advice::{AdviceClient, AdviceSequencer};
use crate::calc::{build_tips, classify_risk, compute_footprint, scale_for_timeframe};
use crate::chart::ChartSnapshot;
use crate::error::{FootprintError, Result};
use crate::history::{HistoryEntry, HistoryStore};
use crate::report::{render_pdf, ReportContent};
use crate::types::{CalculationResult, Measurements, RiskBand, ScaledResult, Timeframe};

const NO_RESULT: &str = "Please calculate first.";

/// One calculator session. Observably it is in one of two states: no result
/// computed yet, or the latest successful computation is current. Report
/// export and advice requests are only valid in the latter state.
pub struct FootprintSession<S: HistoryStore> {
    store: S,
    sequencer: AdviceSequencer,
    current: Option<Computation>,
}

/// A successful computation together with the inputs that produced it.
#[derive(Debug, Clone)]
pub struct Computation {
    pub inputs: Measurements,
    pub result: CalculationResult,
}

impl<S: HistoryStore> FootprintSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            sequencer: AdviceSequencer::new(),
            current: None,
        }
    }

    /// Computes and makes the result current. A validation failure leaves
    /// the session state untouched.
    pub fn compute(&mut self, inputs: Measurements) -> Result<&CalculationResult> {
        let result = compute_footprint(&inputs)?;
        let computation = self.current.insert(Computation { inputs, result });
        Ok(&computation.result)
    }

    pub fn current(&self) -> Option<&Computation> {
        self.current.as_ref()
    }

    fn require_current(&self) -> Result<&Computation> {
        self.current
            .as_ref()
            .ok_or(FootprintError::Precondition(NO_RESULT))
    }

    pub fn scaled(&self, timeframe: Timeframe) -> Result<ScaledResult> {
        Ok(scale_for_timeframe(&self.require_current()?.result, timeframe))
    }

    pub fn band(&self) -> Result<RiskBand> {
        Ok(classify_risk(self.require_current()?.result.total))
    }

    pub fn tips(&self) -> Result<Vec<String>> {
        Ok(build_tips(&self.require_current()?.result))
    }

    /// Computes from `inputs` and appends the result to the persisted
    /// history. Saving does not require a prior [`compute`](Self::compute);
    /// a validation failure records nothing.
    pub fn save(&mut self, inputs: Measurements) -> Result<Vec<HistoryEntry>> {
        let result = compute_footprint(&inputs)?;
        let entry = HistoryEntry::new(inputs, &result, Utc::now());
        let entries = self.store.record(entry)?;
        if let Some(newest) = entries.first() {
            info!(
                total_weekly = newest.total_weekly,
                held = entries.len(),
                "saved calculation to history"
            );
        }
        self.current = Some(Computation { inputs, result });
        Ok(entries)
    }

    pub fn history(&self) -> Result<Vec<HistoryEntry>> {
        self.store.load()
    }

    pub fn clear_history(&self) -> Result<()> {
        self.store.clear()
    }

    /// Requests advice for the current result. Returns `Ok(None)` when the
    /// response arrives after a newer request has been issued; only the
    /// latest response is ever applied.
    pub async fn request_advice(&self, client: &AdviceClient) -> Result<Option<String>> {
        let computation = self.require_current()?;
        let ticket = self.sequencer.issue();
        let text = client
            .request_advice(computation.result.total, &computation.result.parts)
            .await?;
        if self.sequencer.is_current(ticket) {
            Ok(Some(text))
        } else {
            debug!(ticket, "discarding stale advice response");
            Ok(None)
        }
    }

    /// Renders the PDF report for the current result in the given timeframe.
    pub fn export_report(
        &self,
        timeframe: Timeframe,
        advice: Option<String>,
        chart: Option<&ChartSnapshot>,
    ) -> Result<Vec<u8>> {
        let computation = self.require_current()?;
        let content = ReportContent {
            generated_at: Utc::now(),
            scaled: scale_for_timeframe(&computation.result, timeframe),
            weekly_total: computation.result.total,
            band: classify_risk(computation.result.total),
            tips: build_tips(&computation.result),
            advice,
        };
        render_pdf(&content, chart)
    }
}
