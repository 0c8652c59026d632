//! Landing page listing gallery presets

use dioxus::prelude::*;
use folio_common::GalleryConfig;

use crate::demo_data;
use crate::url_state::{self, DemoState, ViewportMode};
use crate::Route;

/// Named starting configuration for the demo
#[derive(Clone, PartialEq)]
pub struct Preset {
    pub title: &'static str,
    pub description: &'static str,
    pub state: DemoState,
}

impl Preset {
    fn new(title: &'static str, description: &'static str, image_count: usize) -> Self {
        Self {
            title,
            description,
            state: DemoState {
                image_count,
                ..DemoState::default()
            },
        }
    }

    fn viewport(mut self, viewport: ViewportMode) -> Self {
        self.state.viewport = viewport;
        self
    }

    fn config(mut self, config: GalleryConfig) -> Self {
        self.state.config = config;
        self
    }

    pub fn route(&self) -> Route {
        Route::GalleryDemo {
            state: Some(url_state::encode(&self.state)),
        }
    }
}

pub fn presets() -> Vec<Preset> {
    vec![
        Preset::new("Three images", "Smallest gallery where every filmstrip slot differs", 3),
        Preset::new(
            "Full gallery",
            "Every fixture image",
            demo_data::fixture_count(),
        ),
        Preset::new("Single image", "Prev, current and next are the same image", 1),
        Preset::new("Empty", "No tiles; the overlay can never open", 0),
        Preset::new("Narrow viewport", "Single column, overlay suppressed", 3)
            .viewport(ViewportMode::Narrow),
        Preset::new("Three columns", "Wide layout with a custom column count", 6).config(
            GalleryConfig {
                wide_columns: 3,
                ..GalleryConfig::default()
            },
        ),
    ]
}

#[component]
fn PresetCard(preset: Preset) -> Element {
    rsx! {
        Link {
            to: preset.route(),
            class: "block p-4 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors",
            div { class: "font-medium", "{preset.title}" }
            div { class: "text-sm text-gray-400", "{preset.description}" }
        }
    }
}

#[component]
pub fn PresetIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "folio gallery" }
            div { class: "grid grid-cols-3 gap-4",
                for preset in presets() {
                    PresetCard { key: "{preset.title}", preset }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_routes_decode() {
        for preset in presets() {
            let Route::GalleryDemo { state: Some(encoded) } = preset.route() else {
                panic!("preset {} has no state", preset.title);
            };
            assert_eq!(url_state::decode(&encoded).unwrap(), preset.state);
        }
    }
}
