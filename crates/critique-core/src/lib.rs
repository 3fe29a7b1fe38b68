pub mod asset;
pub mod category;
pub mod errors;
pub mod ids;
pub mod request;
pub mod security;

pub use asset::DesignAsset;
pub use category::{AnalysisCategory, FocusArea};
pub use errors::ModelError;
pub use ids::{AssetId, RunId, SessionId};
pub use request::{AnalysisRequest, AnalysisSection, RunAbort, RunOutcome, RunReport, SkippedAsset};
pub use security::ApiKey;
