//! Demo state carried in the URL
//!
//! The control state is serialized as base64url-encoded JSON in a single
//! `state` query parameter, which keeps URLs opaque and shareable.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use folio_common::{GalleryConfig, Viewport};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("invalid base64url encoding")]
    InvalidBase64,
    #[error("invalid demo state payload: {0}")]
    InvalidJson(String),
    #[error("invalid gallery config: {0}")]
    InvalidConfig(#[from] folio_common::ConfigError),
}

/// Which viewport the demo renders for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportMode {
    /// Follow the real window width
    #[default]
    Auto,
    Narrow,
    Wide,
}

impl ViewportMode {
    pub const ALL: [ViewportMode; 3] = [ViewportMode::Auto, ViewportMode::Narrow, ViewportMode::Wide];

    pub fn label(&self) -> &'static str {
        match self {
            ViewportMode::Auto => "Auto",
            ViewportMode::Narrow => "Narrow",
            ViewportMode::Wide => "Wide",
        }
    }

    pub fn override_viewport(&self) -> Option<Viewport> {
        match self {
            ViewportMode::Auto => None,
            ViewportMode::Narrow => Some(Viewport::Narrow),
            ViewportMode::Wide => Some(Viewport::Wide),
        }
    }
}

/// Controls of the gallery demo page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoState {
    #[serde(default = "default_image_count")]
    pub image_count: usize,
    #[serde(default)]
    pub viewport: ViewportMode,
    #[serde(default)]
    pub config: GalleryConfig,
}

fn default_image_count() -> usize {
    3
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            image_count: default_image_count(),
            viewport: ViewportMode::default(),
            config: GalleryConfig::default(),
        }
    }
}

pub fn encode(state: &DemoState) -> String {
    let json = serde_json::to_vec(state).expect("DemoState is always serializable");
    URL_SAFE_NO_PAD.encode(json)
}

pub fn decode(s: &str) -> Result<DemoState, StateError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(s.trim())
        .map_err(|_| StateError::InvalidBase64)?;
    let state: DemoState =
        serde_json::from_slice(&bytes).map_err(|e| StateError::InvalidJson(e.to_string()))?;
    state.config.validate()?;
    Ok(state)
}

/// Decode the optional query parameter, falling back to defaults on anything invalid.
pub fn decode_or_default(state: Option<&str>) -> DemoState {
    match state.filter(|s| !s.is_empty()).map(decode) {
        None => DemoState::default(),
        Some(Ok(state)) => state,
        Some(Err(e)) => {
            tracing::warn!("Ignoring demo state from URL: {}", e);
            DemoState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_survives_url() {
        let state = DemoState {
            image_count: 7,
            viewport: ViewportMode::Narrow,
            config: GalleryConfig {
                wide_columns: 3,
                ..GalleryConfig::default()
            },
        };
        let encoded = encode(&state);
        assert!(!encoded.contains('='));
        assert_eq!(decode(&encoded).unwrap(), state);
    }

    #[test]
    fn test_missing_fields_default() {
        let encoded = URL_SAFE_NO_PAD.encode(br#"{"image_count": 0}"#);
        let state = decode(&encoded).unwrap();
        assert_eq!(state.image_count, 0);
        assert_eq!(state.viewport, ViewportMode::Auto);
        assert_eq!(state.config, GalleryConfig::default());
    }

    #[test]
    fn test_invalid_base64() {
        assert!(matches!(decode("not base64!"), Err(StateError::InvalidBase64)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let encoded = URL_SAFE_NO_PAD.encode(br#"{"config": {"wide_columns": 0}}"#);
        assert!(matches!(
            decode(&encoded),
            Err(StateError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_decode_or_default_falls_back() {
        assert_eq!(decode_or_default(None), DemoState::default());
        assert_eq!(decode_or_default(Some("")), DemoState::default());
        assert_eq!(decode_or_default(Some("%%%")), DemoState::default());
    }

    #[test]
    fn test_viewport_mode_override() {
        assert_eq!(ViewportMode::Auto.override_viewport(), None);
        assert_eq!(
            ViewportMode::Narrow.override_viewport(),
            Some(Viewport::Narrow)
        );
    }
}
