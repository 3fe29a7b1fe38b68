pub mod analyst;
pub mod factory;
pub mod gemini;
pub mod mock;
pub mod model;

pub use analyst::Analyst;
pub use factory::{FixedFactory, GeminiFactory, ModelFactory};
pub use gemini::{GeminiModel, DEFAULT_MODEL};
pub use mock::MockModel;
pub use model::{GenerateRequest, ImagePart, VisionModel};
