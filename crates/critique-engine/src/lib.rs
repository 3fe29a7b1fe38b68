pub mod convert;
pub mod engine;
pub mod prompts;

pub use convert::{decode_data_url, ConvertError, ConvertedAsset};
pub use engine::{AnalysisEngine, CREDENTIAL_HINT};
