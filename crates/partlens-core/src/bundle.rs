use std::path::Path;

use serde::{Deserialize, Serialize};

/// Nominal package dimension fallbacks, in mm. Used whenever the generation
/// subsystem omits a value (common for parts scraped from partial tables).
pub const DEFAULT_BODY_WIDTH: f64 = 6.0;
pub const DEFAULT_BODY_LENGTH: f64 = 10.0;
pub const DEFAULT_BODY_HEIGHT: f64 = 1.5;
pub const DEFAULT_PITCH: f64 = 1.27;

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid bundle JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Functional classification of a pin. Only used for symbol layout
/// heuristics, never for electrical validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ElectricalRole {
    Input,
    Output,
    Bidirectional,
    PowerIn,
    PowerOut,
    #[default]
    Passive,
    NotConnected,
}

impl ElectricalRole {
    pub fn label(&self) -> &'static str {
        match self {
            ElectricalRole::Input => "input",
            ElectricalRole::Output => "output",
            ElectricalRole::Bidirectional => "bidirectional",
            ElectricalRole::PowerIn => "power_in",
            ElectricalRole::PowerOut => "power_out",
            ElectricalRole::Passive => "passive",
            ElectricalRole::NotConnected => "not_connected",
        }
    }
}

/// One pin as described by the generation subsystem. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDescriptor {
    pub number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub electrical_role: ElectricalRole,
    #[serde(default)]
    pub description: String,
}

/// A nominal/min/max triple for one package dimension. Any field may be
/// missing in collaborator output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSpec {
    pub nominal: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl DimensionSpec {
    pub fn nominal_or(&self, fallback: f64) -> f64 {
        self.nominal.unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDimensions {
    #[serde(default)]
    pub body_width: DimensionSpec,
    #[serde(default)]
    pub body_length: DimensionSpec,
    #[serde(default)]
    pub body_height: DimensionSpec,
    #[serde(default)]
    pub pitch: DimensionSpec,
}

impl PackageDimensions {
    pub fn body_width(&self) -> f64 {
        self.body_width.nominal_or(DEFAULT_BODY_WIDTH)
    }

    pub fn body_length(&self) -> f64 {
        self.body_length.nominal_or(DEFAULT_BODY_LENGTH)
    }

    pub fn body_height(&self) -> f64 {
        self.body_height.nominal_or(DEFAULT_BODY_HEIGHT)
    }

    pub fn pitch(&self) -> f64 {
        self.pitch.nominal_or(DEFAULT_PITCH)
    }
}

/// Cross-consistency findings produced by the generation subsystem.
/// Displayed verbatim; PartLens never interprets the contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub traceability: Vec<serde_json::Value>,
}

/// The complete asset bundle handed over per "generate" action. All visuals
/// are re-derived from this object; PartLens itself never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBundle {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub package_type: String,
    #[serde(default)]
    pub pin_count: usize,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub pin_numbering: String,
    #[serde(default)]
    pub dimensions: PackageDimensions,
    #[serde(default)]
    pub pins: Vec<PinDescriptor>,
    /// KiCad footprint text, kept verbatim for export.
    #[serde(default)]
    pub footprint_text: String,
    /// KiCad symbol library text, kept verbatim for export.
    #[serde(default)]
    pub symbol_text: String,
    /// 3D model generator script, kept verbatim for export.
    #[serde(default)]
    pub model_script: String,
    #[serde(default)]
    pub report: Option<ConsistencyReport>,
}

impl ComponentBundle {
    pub fn from_json(json: &str) -> Result<Self, BundleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, BundleError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up a pin by number. Returns None for numbers that exist only in
    /// the footprint text (display-layer mismatch, not a hard error).
    pub fn pin(&self, number: &str) -> Option<&PinDescriptor> {
        self.pins.iter().find(|p| p.number == number)
    }

    /// Lead count for the 3D package model: the declared pin count when
    /// present, else however many pins were described.
    pub fn lead_count(&self) -> usize {
        if self.pin_count > 0 {
            self.pin_count
        } else {
            self.pins.len()
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed component"
        } else {
            &self.name
        }
    }
}

/// Built-in demo bundle shown at startup so the preview is never empty.
pub fn demo_bundle() -> ComponentBundle {
    let json = include_str!("../assets/demo_bundle.json");
    match ComponentBundle::from_json(json) {
        Ok(bundle) => bundle,
        Err(e) => {
            log::error!("Failed to parse built-in demo bundle: {}", e);
            ComponentBundle::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_lookup_and_stale_number() {
        let bundle = demo_bundle();
        assert!(bundle.pin("1").is_some());
        assert!(bundle.pin("99").is_none());
    }

    #[test]
    fn test_dimension_defaults() {
        let dims = PackageDimensions::default();
        assert_eq!(dims.body_width(), DEFAULT_BODY_WIDTH);
        assert_eq!(dims.body_length(), DEFAULT_BODY_LENGTH);
        assert_eq!(dims.body_height(), DEFAULT_BODY_HEIGHT);
        assert_eq!(dims.pitch(), DEFAULT_PITCH);
    }

    #[test]
    fn test_minimal_bundle_json() {
        let bundle = ComponentBundle::from_json(
            r#"{"name": "LM358", "pins": [{"number": "1", "name": "OUT1", "electricalRole": "output"}]}"#,
        )
        .unwrap();
        assert_eq!(bundle.display_name(), "LM358");
        assert_eq!(bundle.pins.len(), 1);
        assert_eq!(bundle.pins[0].electrical_role, ElectricalRole::Output);
        assert_eq!(bundle.lead_count(), 1);
    }

    #[test]
    fn test_malformed_json_is_an_error_not_a_panic() {
        assert!(ComponentBundle::from_json("{not json").is_err());
    }

    #[test]
    fn test_demo_bundle_parses() {
        let bundle = demo_bundle();
        assert!(!bundle.pins.is_empty());
        assert!(!bundle.footprint_text.is_empty());
    }
}
