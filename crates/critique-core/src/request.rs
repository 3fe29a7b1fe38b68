use serde::{Deserialize, Serialize};

use crate::asset::DesignAsset;
use crate::category::{AnalysisCategory, FocusArea};
use crate::ids::RunId;

/// One run-analysis invocation. Built fresh per trigger, immutable once
/// built, discarded after the report is rendered.
#[derive(Clone, Debug)]
pub struct AnalysisRequest {
    pub categories: Vec<AnalysisCategory>,
    pub focus_areas: Vec<FocusArea>,
    pub context: String,
    pub assets: Vec<DesignAsset>,
}

impl AnalysisRequest {
    pub fn new(
        categories: Vec<AnalysisCategory>,
        focus_areas: Vec<FocusArea>,
        context: impl Into<String>,
        assets: Vec<DesignAsset>,
    ) -> Self {
        Self {
            categories,
            focus_areas,
            context: context.into(),
            assets,
        }
    }

    pub fn has_category(&self, category: AnalysisCategory) -> bool {
        self.categories.contains(&category)
    }
}

/// An asset dropped from the run because its conversion failed. The rest of
/// the run proceeds without it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkippedAsset {
    pub name: String,
    pub reason: String,
}

/// One category's rendered critique.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisSection {
    pub category: AnalysisCategory,
    pub heading: String,
    pub body: String,
}

/// A remote-call failure that stopped the run. Categories completed before
/// the failure keep their sections.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunAbort {
    pub error: String,
    pub hint: String,
}

/// Everything one run produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub skipped_assets: Vec<SkippedAsset>,
    pub sections: Vec<AnalysisSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aborted: Option<RunAbort>,
}

/// Outcome of the orchestrator's single public operation.
#[derive(Clone, Debug)]
pub enum RunOutcome {
    /// The request carried zero assets: warn, make no remote call.
    NoAssets,
    Report(RunReport),
}

impl RunOutcome {
    pub fn report(&self) -> Option<&RunReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::NoAssets => None,
        }
    }
}
