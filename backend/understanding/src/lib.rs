pub mod identify;
pub mod mock;
pub mod vision;

pub use identify::identify_plant;
pub use mock::StubVisionModel;
pub use vision::{DEFAULT_GEMINI_BASE_URL, GeminiVision};
