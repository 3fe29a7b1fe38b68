use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use critique_core::{
    AnalysisCategory, AnalysisRequest, AnalysisSection, RunAbort, RunId, RunOutcome, RunReport,
    SkippedAsset,
};
use critique_llm::{Analyst, ImagePart, VisionModel};

use crate::convert;
use crate::prompts;

/// Hint attached to every remote-call failure; the credential is the most
/// common culprit.
pub const CREDENTIAL_HINT: &str = "Please check your API key and try again.";

/// The Analysis Orchestrator: turns one request into one remote call per
/// selected category and assembles the report.
pub struct AnalysisEngine {
    visual: Analyst,
    ux: Analyst,
}

impl AnalysisEngine {
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self {
            visual: Analyst::visual(Arc::clone(&model)),
            ux: Analyst::ux(model),
        }
    }

    fn analyst(&self, category: AnalysisCategory) -> &Analyst {
        match category {
            AnalysisCategory::VisualDesign => &self.visual,
            AnalysisCategory::UserExperience => &self.ux,
        }
    }

    /// Run one analysis request to completion. Categories execute
    /// sequentially in fixed order (Visual Design before User Experience);
    /// a remote-call failure aborts the remaining categories but keeps the
    /// sections already produced.
    #[instrument(skip(self, request), fields(run_id))]
    pub async fn run(&self, request: &AnalysisRequest) -> RunOutcome {
        if request.assets.is_empty() {
            info!("run triggered with no design assets");
            return RunOutcome::NoAssets;
        }

        let run_id = RunId::new();
        tracing::Span::current().record("run_id", run_id.as_str());

        // Convert each asset independently; a failure drops that asset only.
        let mut images = Vec::new();
        let mut skipped = Vec::new();
        for asset in &request.assets {
            let converted = convert::convert_asset(asset)
                .and_then(|converted| convert::read_base64(&converted));
            match converted {
                Ok(data) => images.push(ImagePart::png(data)),
                Err(e) => {
                    warn!(asset = %asset.name, error = %e, "asset conversion failed");
                    skipped.push(SkippedAsset {
                        name: asset.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let mut report = RunReport {
            run_id,
            skipped_assets: skipped,
            sections: Vec::new(),
            summary: None,
            aborted: None,
        };

        if images.is_empty() {
            warn!("no design assets survived conversion");
            report.aborted = Some(RunAbort {
                error: "None of the supplied designs could be processed.".to_string(),
                hint: "Upload clear, high-resolution images and try again.".to_string(),
            });
            return RunOutcome::Report(report);
        }

        for category in AnalysisCategory::ALL {
            if !request.has_category(category) {
                continue;
            }

            let analyst = self.analyst(category);
            let prompt = prompts::compose(category, &request.focus_areas, &request.context);
            info!(category = %category, images = images.len(), "requesting analysis");

            match analyst.run(&prompt, images.clone()).await {
                Ok(body) => report.sections.push(AnalysisSection {
                    category,
                    heading: analyst.heading().to_string(),
                    body,
                }),
                Err(e) => {
                    error!(category = %category, kind = e.error_kind(), error = %e, "analysis call failed");
                    report.aborted = Some(RunAbort {
                        error: format!("An error occurred during analysis: {e}"),
                        hint: CREDENTIAL_HINT.to_string(),
                    });
                    break;
                }
            }
        }

        if report.aborted.is_none() && request.categories.len() > 1 {
            report.summary = Some(prompts::SUMMARY_NOTE.to_string());
        }

        RunOutcome::Report(report)
    }
}
