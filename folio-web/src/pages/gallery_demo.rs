//! Gallery demo page with URL-synced controls

use dioxus::prelude::*;
use folio_common::GalleryState;
use folio_ui::GalleryWidget;

use crate::demo_data;
use crate::url_state::{self, DemoState, ViewportMode};
use crate::Route;

const IMAGE_COUNTS: [usize; 4] = [0, 1, 3, 12];

fn status_line(state: &GalleryState, len: usize) -> String {
    match (state.is_open(), state.selected()) {
        (true, Some(i)) => {
            let caption = demo_data::caption(i).unwrap_or("untitled");
            format!("Overlay open on {} / {} ({})", i + 1, len, caption)
        }
        _ => "Overlay closed".to_string(),
    }
}

#[component]
fn ControlButton(label: String, active: bool, onclick: EventHandler<()>) -> Element {
    let class = if active {
        "px-3 py-1.5 text-sm rounded-lg bg-indigo-600 text-white"
    } else {
        "px-3 py-1.5 text-sm rounded-lg bg-gray-700 hover:bg-gray-600 text-gray-300"
    };
    rsx! {
        button { class, onclick: move |_| onclick.call(()), "{label}" }
    }
}

#[component]
pub fn GalleryDemo(state: Option<String>) -> Element {
    let demo = url_state::decode_or_default(state.as_deref());
    let images = demo_data::image_urls(demo.image_count);
    let len = images.len();
    let mut observed = use_signal(GalleryState::new);
    let nav = navigator();

    let apply = move |next: DemoState| {
        let _ = nav.replace(Route::GalleryDemo {
            state: Some(url_state::encode(&next)),
        });
    };

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            div { class: "flex items-center gap-4 mb-6",
                Link { to: Route::PresetIndex {}, class: "text-gray-400 hover:text-white", "← Presets" }
                h1 { class: "text-2xl font-bold", "Gallery" }
            }

            div { class: "flex flex-wrap items-center gap-6 mb-6",
                div { class: "flex items-center gap-2",
                    span { class: "text-sm text-gray-400", "Images" }
                    for count in IMAGE_COUNTS {
                        {
                            let demo = demo.clone();
                            let active = demo.image_count == count;
                            rsx! {
                                ControlButton {
                                    key: "count-{count}",
                                    label: count.to_string(),
                                    active,
                                    onclick: move |_| {
                                        apply(DemoState {
                                            image_count: count,
                                            ..demo.clone()
                                        })
                                    },
                                }
                            }
                        }
                    }
                }
                div { class: "flex items-center gap-2",
                    span { class: "text-sm text-gray-400", "Viewport" }
                    for mode in ViewportMode::ALL {
                        {
                            let demo = demo.clone();
                            let active = demo.viewport == mode;
                            rsx! {
                                ControlButton {
                                    key: "viewport-{mode:?}",
                                    label: mode.label().to_string(),
                                    active,
                                    onclick: move |_| {
                                        apply(DemoState {
                                            viewport: mode,
                                            ..demo.clone()
                                        })
                                    },
                                }
                            }
                        }
                    }
                }
            }

            div { class: "text-sm text-gray-400 mb-4", {status_line(&observed(), len)} }

            GalleryWidget {
                images,
                config: demo.config.clone(),
                viewport_override: demo.viewport.override_viewport(),
                on_change: move |next: GalleryState| observed.set(next),
            }
        }
    }
}
