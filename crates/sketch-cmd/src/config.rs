//! Command defaults
//!
//! Every optional command argument falls back to a value from
//! [`SketchConfig`]. The defaults reproduce the plugin's keyword defaults;
//! a JSON document can override any subset of them.
//!
//! ```
//! use sketch_cmd::SketchConfig;
//!
//! let config = SketchConfig::from_json(r#"{ "sphere": { "radius": 2.5 } }"#).unwrap();
//! assert_eq!(config.sphere.radius, 2.5);
//! assert_eq!(config.sphere.color, "gray");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CmdError, CmdResult};

/// Defaults for `sketch_pcoc` / `sketch_pcom`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PseudoatomDefaults {
    pub prefix: String,
    pub coc_suffix: String,
    pub com_suffix: String,
}

impl Default for PseudoatomDefaults {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            coc_suffix: "_coc".to_string(),
            com_suffix: "_com".to_string(),
        }
    }
}

/// Defaults for `sketch_scoc` / `sketch_scom`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereDefaults {
    pub coc_prefix: String,
    pub com_prefix: String,
    pub radius: f64,
    pub color: String,
    pub alpha: f32,
}

impl Default for SphereDefaults {
    fn default() -> Self {
        Self {
            coc_prefix: "coc".to_string(),
            com_prefix: "com".to_string(),
            radius: 1.0,
            color: "gray".to_string(),
            alpha: 0.5,
        }
    }
}

/// Defaults for `sketch_bbox`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxDefaults {
    pub prefix: String,
    pub padding: f64,
    pub line_width: f32,
    pub color: String,
    pub alpha: f32,
}

impl Default for BoxDefaults {
    fn default() -> Self {
        Self {
            prefix: "bbox".to_string(),
            padding: 0.0,
            line_width: sketch_cgo::DEFAULT_LINE_WIDTH,
            color: "gray".to_string(),
            alpha: 0.5,
        }
    }
}

/// Defaults for `sketch_rgyr`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GyrationDefaults {
    pub prefix: String,
    pub mass_weighted: bool,
    pub color: String,
    pub alpha: f32,
}

impl Default for GyrationDefaults {
    fn default() -> Self {
        Self {
            prefix: "rgyr".to_string(),
            mass_weighted: true,
            color: "gray".to_string(),
            alpha: 0.3,
        }
    }
}

/// Defaults for `sketch_arrow`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowDefaults {
    pub prefix: String,
    pub radius: f64,
    pub color: String,
    pub alpha: f32,
    pub head_length_scale: f64,
    pub head_radius_scale: f64,
}

impl Default for ArrowDefaults {
    fn default() -> Self {
        Self {
            prefix: "arrow".to_string(),
            radius: 0.2,
            color: "white".to_string(),
            alpha: 1.0,
            head_length_scale: sketch_cgo::DEFAULT_HEAD_LENGTH_SCALE,
            head_radius_scale: sketch_cgo::DEFAULT_HEAD_RADIUS_SCALE,
        }
    }
}

/// Per-command defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Print a summary line after each command
    pub verbose: bool,
    pub pseudoatom: PseudoatomDefaults,
    pub sphere: SphereDefaults,
    #[serde(rename = "bbox")]
    pub bounding_box: BoxDefaults,
    pub gyration: GyrationDefaults,
    pub arrow: ArrowDefaults,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            pseudoatom: PseudoatomDefaults::default(),
            sphere: SphereDefaults::default(),
            bounding_box: BoxDefaults::default(),
            gyration: GyrationDefaults::default(),
            arrow: ArrowDefaults::default(),
        }
    }
}

impl SketchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON; missing keys keep their defaults
    pub fn from_json(text: &str) -> CmdResult<Self> {
        serde_json::from_str(text).map_err(|e| CmdError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> CmdResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CmdError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SketchConfig::new();
        assert!(config.verbose);
        assert_eq!(config.pseudoatom.coc_suffix, "_coc");
        assert_eq!(config.pseudoatom.com_suffix, "_com");
        assert_eq!(config.sphere.alpha, 0.5);
        assert_eq!(config.bounding_box.line_width, 2.0);
        assert_eq!(config.arrow.head_length_scale, 3.0);
    }

    #[test]
    fn test_partial_json() {
        let config =
            SketchConfig::from_json(r#"{ "bbox": { "padding": 1.5 }, "gyration": { "mass_weighted": false } }"#)
                .unwrap();
        assert!(config.verbose);
        assert_eq!(config.bounding_box.padding, 1.5);
        assert_eq!(config.bounding_box.prefix, "bbox");
        assert!(!config.gyration.mass_weighted);

        let quiet = SketchConfig::from_json(r#"{ "verbose": false }"#).unwrap();
        assert!(!quiet.verbose);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = SketchConfig::new();
        config.sphere.color = "red".to_string();
        let parsed = SketchConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            SketchConfig::from_json("{ not json"),
            Err(CmdError::Config(_))
        ));
        assert!(matches!(
            SketchConfig::from_json(r#"{ "sphere": { "radius": "big" } }"#),
            Err(CmdError::Config(_))
        ));
    }
}
