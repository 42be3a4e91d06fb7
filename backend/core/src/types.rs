use serde::{Deserialize, Serialize};

/// Placeholder for name, scientific name, and family when the model omits them.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for a missing description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Structured identification result returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantInfo {
    pub name: String,
    pub scientific_name: String,
    pub family: String,
    pub description: String,
    #[serde(default)]
    pub native_to: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunlight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watering: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil: Option<String>,
}

impl PlantInfo {
    /// Characteristic → value rows shown under the plant name.
    ///
    /// Rows for absent optional fields are left out.
    pub fn characteristics(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Scientific Name", self.scientific_name.clone()),
            ("Family", self.family.clone()),
            ("Native To", self.native_to.join(", ")),
        ];
        let optional = [
            ("Sunlight Needs", &self.sunlight),
            ("Watering Needs", &self.watering),
            ("Soil Type", &self.soil),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                rows.push((label, value.clone()));
            }
        }
        rows
    }
}

impl Default for PlantInfo {
    fn default() -> Self {
        Self {
            name: UNKNOWN.to_string(),
            scientific_name: UNKNOWN.to_string(),
            family: UNKNOWN.to_string(),
            description: NO_DESCRIPTION.to_string(),
            native_to: Vec::new(),
            sunlight: None,
            watering: None,
            soil: None,
        }
    }
}

/// Body of every non-2xx response from the identification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            stack: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Interpret a failed response body, if it carries the error shape.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// An uploaded or captured image awaiting identification.
#[derive(Debug, Clone)]
pub struct ImageSubmission {
    pub data: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl ImageSubmission {
    pub fn new(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

/// What the capture client is currently showing. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClientState {
    #[default]
    Idle,
    Loading,
    Failed(ErrorResponse),
    Identified(PlantInfo),
}

impl ClientState {
    /// A submission went out; any earlier result or error is hidden.
    pub fn begin(&mut self) {
        *self = ClientState::Loading;
    }

    /// The submission resolved. Whichever call finishes last wins.
    pub fn finish(&mut self, outcome: Result<PlantInfo, ErrorResponse>) {
        *self = match outcome {
            Ok(plant) => ClientState::Identified(plant),
            Err(error) => ClientState::Failed(error),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ClientState::Loading)
    }

    pub fn plant(&self) -> Option<&PlantInfo> {
        match self {
            ClientState::Identified(plant) => Some(plant),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorResponse> {
        match self {
            ClientState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let plant = PlantInfo {
            name: "Rose".into(),
            sunlight: Some("Full sun".into()),
            ..PlantInfo::default()
        };
        let value = serde_json::to_value(&plant).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Rose",
                "scientificName": "Unknown",
                "family": "Unknown",
                "description": "No description available.",
                "nativeTo": [],
                "sunlight": "Full sun",
            })
        );
    }

    #[test]
    fn characteristics_skip_absent_rows() {
        let plant = PlantInfo {
            native_to: vec!["Asia".into(), "Europe".into()],
            soil: Some("Loam".into()),
            ..PlantInfo::default()
        };
        let rows = plant.characteristics();
        let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, ["Scientific Name", "Family", "Native To", "Soil Type"]);
        assert_eq!(rows[2].1, "Asia, Europe");
    }

    #[test]
    fn error_body_requires_error_key() {
        let parsed = ErrorResponse::from_body(r#"{"error":"No image provided"}"#).unwrap();
        assert_eq!(parsed, ErrorResponse::new("No image provided"));
        assert!(ErrorResponse::from_body(r#"{"message":"nope"}"#).is_none());
        assert!(ErrorResponse::from_body("<html>").is_none());
    }

    #[test]
    fn client_state_is_exclusive() {
        let mut state = ClientState::default();
        state.finish(Err(ErrorResponse::new("boom")));
        assert!(state.error().is_some());

        state.begin();
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(state.plant().is_none());

        state.finish(Ok(PlantInfo::default()));
        assert!(state.plant().is_some());
        assert!(state.error().is_none());
    }
}
