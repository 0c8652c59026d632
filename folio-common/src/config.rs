use serde::{Deserialize, Serialize};

use crate::{ImageHints, Viewport};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid gallery config: {0}")]
    InvalidJson(String),
    #[error("column count must be at least 1")]
    ZeroColumns,
    #[error("breakpoint must be a positive width")]
    ZeroBreakpoint,
    #[error("dimmed opacity {0} is outside 0.0..=1.0")]
    OpacityOutOfRange(f32),
}

/// Layout knobs for a gallery. Every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Viewports narrower than this (CSS px) are treated as narrow
    #[serde(default = "default_breakpoint_px")]
    pub breakpoint_px: u32,
    #[serde(default = "default_wide_columns")]
    pub wide_columns: u32,
    #[serde(default = "default_narrow_columns")]
    pub narrow_columns: u32,
    /// Rendition requested for grid tiles
    #[serde(default)]
    pub thumbnail: ImageHints,
    /// Opacity of the previous/next filmstrip frames
    #[serde(default = "default_dimmed_opacity")]
    pub dimmed_opacity: f32,
}

fn default_breakpoint_px() -> u32 {
    600
}

fn default_wide_columns() -> u32 {
    4
}

fn default_narrow_columns() -> u32 {
    1
}

fn default_dimmed_opacity() -> f32 {
    0.3
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: default_breakpoint_px(),
            wide_columns: default_wide_columns(),
            narrow_columns: default_narrow_columns(),
            thumbnail: ImageHints::default(),
            dimmed_opacity: default_dimmed_opacity(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wide_columns == 0 || self.narrow_columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.breakpoint_px == 0 {
            return Err(ConfigError::ZeroBreakpoint);
        }
        if !(0.0..=1.0).contains(&self.dimmed_opacity) {
            return Err(ConfigError::OpacityOutOfRange(self.dimmed_opacity));
        }
        Ok(())
    }

    pub fn columns(&self, viewport: Viewport) -> u32 {
        match viewport {
            Viewport::Narrow => self.narrow_columns,
            Viewport::Wide => self.wide_columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.breakpoint_px, 600);
        assert_eq!(config.columns(Viewport::Wide), 4);
        assert_eq!(config.columns(Viewport::Narrow), 1);
        assert_eq!(config.thumbnail, ImageHints::thumbnail());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = GalleryConfig::from_json("{}").unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = GalleryConfig::from_json(r#"{"wide_columns": 3, "breakpoint_px": 720}"#)
            .unwrap();
        assert_eq!(config.wide_columns, 3);
        assert_eq!(config.breakpoint_px, 720);
        assert_eq!(config.narrow_columns, 1);
    }

    #[test]
    fn test_rejects_zero_columns() {
        let err = GalleryConfig::from_json(r#"{"narrow_columns": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroColumns));
    }

    #[test]
    fn test_rejects_zero_breakpoint() {
        let err = GalleryConfig::from_json(r#"{"breakpoint_px": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBreakpoint));
    }

    #[test]
    fn test_rejects_bad_opacity() {
        let err = GalleryConfig::from_json(r#"{"dimmed_opacity": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OpacityOutOfRange(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GalleryConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson(_)));
    }
}
