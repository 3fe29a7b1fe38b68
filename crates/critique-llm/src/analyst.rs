use std::sync::Arc;

use critique_core::ModelError;

use crate::model::{GenerateRequest, ImagePart, VisionModel};

/// Fixed instruction preamble for the visual-design critique.
const VISUAL_INSTRUCTIONS: &[&str] = &[
    "You are a visual analysis expert that:",
    "1. Identifies design elements, patterns, and visual hierarchy",
    "2. Analyzes color schemes, typography, and layouts",
    "3. Detects UI components and their relationships",
    "4. Evaluates visual consistency and branding",
    "Be specific and technical in your analysis",
];

/// Fixed instruction preamble for the UX critique.
const UX_INSTRUCTIONS: &[&str] = &[
    "You are a UX analysis expert that:",
    "1. Evaluates user flows and interaction patterns",
    "2. Identifies usability issues and opportunities",
    "3. Suggests UX improvements based on best practices",
    "4. Analyzes accessibility and inclusive design",
    "Focus on user-centric insights and practical improvements",
];

/// One remote-agent binding: the shared prompt+images capability paired with
/// a fixed instruction preamble and result heading. Two configurations
/// exist, one per analysis category.
pub struct Analyst {
    model: Arc<dyn VisionModel>,
    instructions: &'static [&'static str],
    heading: &'static str,
}

impl Analyst {
    pub fn visual(model: Arc<dyn VisionModel>) -> Self {
        Self {
            model,
            instructions: VISUAL_INSTRUCTIONS,
            heading: "Visual Design Analysis",
        }
    }

    pub fn ux(model: Arc<dyn VisionModel>) -> Self {
        Self {
            model,
            instructions: UX_INSTRUCTIONS,
            heading: "UX Analysis",
        }
    }

    pub fn heading(&self) -> &'static str {
        self.heading
    }

    pub async fn run(&self, prompt: &str, images: Vec<ImagePart>) -> Result<String, ModelError> {
        let request = GenerateRequest {
            system: self.instructions.iter().map(|s| s.to_string()).collect(),
            prompt: prompt.to_string(),
            images,
        };
        self.model.generate(&request).await
    }
}
