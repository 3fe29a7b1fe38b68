use critique_core::{AnalysisCategory, FocusArea};

/// Fixed note rendered after the sections when more than one category ran.
pub const SUMMARY_NOTE: &str = "Above you'll find detailed analysis from multiple specialized AI agents, each focusing on their area of expertise:\n- Visual Design Agent: Analyzes design elements and patterns\n- UX Agent: Evaluates user experience and interactions";

/// Compose the category-specific prompt, interpolating the selected focus
/// areas and the user's free-text context.
pub fn compose(category: AnalysisCategory, focus_areas: &[FocusArea], context: &str) -> String {
    let focus = FocusArea::join_labels(focus_areas);
    match category {
        AnalysisCategory::VisualDesign => format!(
            "Analyze these designs focusing on: {focus}\n\
             Additional context: {context}\n\
             Provide specific insights about visual design elements.\n\
             \n\
             Please format your response with clear headers and bullet points.\n\
             Focus on concrete observations and actionable insights."
        ),
        AnalysisCategory::UserExperience => format!(
            "Evaluate the user experience considering: {focus}\n\
             Additional context: {context}\n\
             Focus on user flows, interactions, and accessibility.\n\
             \n\
             Please format your response with clear headers and bullet points.\n\
             Focus on concrete observations and actionable improvements."
        ),
    }
}
