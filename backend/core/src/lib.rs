//! Planty core: the identification result model, the label parser that
//! produces it, and the seam behind which the vision model sits.

pub mod parse;
pub mod traits;
pub mod types;

pub use parse::{extract_info, parse_plant_info, split_regions, Field};
pub use traits::{
    HarmBlockThreshold, HarmCategory, IdentificationRequest, SafetySetting, VisionModel,
    IDENTIFY_PROMPT, SAFETY_SETTINGS,
};
pub use types::{ClientState, ErrorResponse, ImageSubmission, PlantInfo, NO_DESCRIPTION, UNKNOWN};
