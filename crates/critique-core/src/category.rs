use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two critique types the service offers. When both are selected they
/// run in the order of `ALL`: Visual Design first, then User Experience.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisCategory {
    VisualDesign,
    UserExperience,
}

impl AnalysisCategory {
    pub const ALL: [AnalysisCategory; 2] =
        [AnalysisCategory::VisualDesign, AnalysisCategory::UserExperience];

    pub fn label(&self) -> &'static str {
        match self {
            Self::VisualDesign => "Visual Design",
            Self::UserExperience => "User Experience",
        }
    }

    /// The selection the UI starts with.
    pub fn default_selection() -> Vec<AnalysisCategory> {
        vec![AnalysisCategory::UserExperience]
    }
}

impl fmt::Display for AnalysisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("unknown analysis category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for AnalysisCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Visual Design" | "visual_design" => Ok(Self::VisualDesign),
            "User Experience" | "user_experience" => Ok(Self::UserExperience),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}

/// Sub-aspects the user can ask the analysis to emphasize. The labels are
/// interpolated verbatim into the prompt.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    ColorScheme,
    Typography,
    Layout,
    Navigation,
    Interactions,
    Accessibility,
}

impl FocusArea {
    pub const ALL: [FocusArea; 6] = [
        FocusArea::ColorScheme,
        FocusArea::Typography,
        FocusArea::Layout,
        FocusArea::Navigation,
        FocusArea::Interactions,
        FocusArea::Accessibility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ColorScheme => "Color Scheme",
            Self::Typography => "Typography",
            Self::Layout => "Layout",
            Self::Navigation => "Navigation",
            Self::Interactions => "Interactions",
            Self::Accessibility => "Accessibility",
        }
    }

    pub fn default_selection() -> Vec<FocusArea> {
        vec![FocusArea::Interactions]
    }

    /// Human-readable join for prompt interpolation, e.g. "Typography, Layout".
    pub fn join_labels(areas: &[FocusArea]) -> String {
        areas
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("unknown focus area: {0}")]
pub struct UnknownFocusArea(pub String);

impl FromStr for FocusArea {
    type Err = UnknownFocusArea;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Color Scheme" | "color_scheme" => Ok(Self::ColorScheme),
            "Typography" | "typography" => Ok(Self::Typography),
            "Layout" | "layout" => Ok(Self::Layout),
            "Navigation" | "navigation" => Ok(Self::Navigation),
            "Interactions" | "interactions" => Ok(Self::Interactions),
            "Accessibility" | "accessibility" => Ok(Self::Accessibility),
            other => Err(UnknownFocusArea(other.to_owned())),
        }
    }
}
