//! Label extraction from free-text model output.
//!
//! The model is asked to answer with one `Label: value` line per field. Each
//! field is looked up independently, so the lines may arrive in any order and
//! any of them may be missing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{PlantInfo, NO_DESCRIPTION, UNKNOWN};

/// The eight labelled fields requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    ScientificName,
    Family,
    Description,
    NativeTo,
    Sunlight,
    Watering,
    Soil,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::ScientificName,
        Field::Family,
        Field::Description,
        Field::NativeTo,
        Field::Sunlight,
        Field::Watering,
        Field::Soil,
    ];

    /// The literal label that starts the field's line.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name:",
            Field::ScientificName => "Scientific Name:",
            Field::Family => "Family:",
            Field::Description => "Description:",
            Field::NativeTo => "Native to:",
            Field::Sunlight => "Sunlight needs:",
            Field::Watering => "Watering needs:",
            Field::Soil => "Soil type:",
        }
    }
}

/// One pattern per field, indexed by `Field as usize`.
///
/// A line matches when, after optional indentation, an optional list bullet and
/// optional markdown bold, it starts with the label. The capture is the rest of
/// that line only.
static FIELD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    Field::ALL
        .iter()
        .map(|field| {
            let pattern = format!(
                r"(?m)^[ \t]*(?:[-*•][ \t]+)?(?:\*\*|__)?{}(?:\*\*|__)?[ \t]*(.*)$",
                regex::escape(field.label())
            );
            Regex::new(&pattern).unwrap()
        })
        .collect()
});

/// Value following the first line labelled `field`, trimmed.
///
/// Returns an empty string when no line carries the label.
pub fn extract_info(text: &str, field: Field) -> String {
    FIELD_PATTERNS[field as usize]
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Split a comma-separated region list, dropping blank segments.
pub fn split_regions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|region| !region.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a [`PlantInfo`] from raw model text.
///
/// Required fields fall back to placeholders; sunlight, watering and soil stay
/// `None` when their label is missing or empty.
pub fn parse_plant_info(text: &str) -> PlantInfo {
    let or_default = |field: Field, default: &str| {
        let value = extract_info(text, field);
        if value.is_empty() {
            default.to_string()
        } else {
            value
        }
    };
    let optional = |field: Field| Some(extract_info(text, field)).filter(|v| !v.is_empty());

    PlantInfo {
        name: or_default(Field::Name, UNKNOWN),
        scientific_name: or_default(Field::ScientificName, UNKNOWN),
        family: or_default(Field::Family, UNKNOWN),
        description: or_default(Field::Description, NO_DESCRIPTION),
        native_to: split_regions(&extract_info(text, Field::NativeTo)),
        sunlight: optional(Field::Sunlight),
        watering: optional(Field::Watering),
        soil: optional(Field::Soil),
    }
}
