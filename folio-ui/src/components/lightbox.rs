//! Gallery lightbox
//!
//! Large view of the selected image with prev/next buttons, a counter and the
//! filmstrip. Holds no state of its own: the parent passes the current
//! `GalleryState` and receives navigation intents back.

use dioxus::prelude::*;
use folio_common::{Filmstrip, GalleryState};

use super::button::{CloseButton, NavButton, NavDirection};
use super::filmstrip::FilmstripView;
use super::Modal;
use crate::layout;

#[component]
pub fn GalleryLightbox(
    is_open: ReadSignal<bool>,
    images: Vec<String>,
    state: GalleryState,
    dimmed_opacity: f32,
    on_close: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let total = images.len();
    let (Some(idx), Some(strip)) = (state.display_index(total), Filmstrip::around(&state, total))
    else {
        return rsx! {};
    };
    let url = images[idx].clone();

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::ArrowLeft => on_prev.call(()),
        Key::ArrowRight => on_next.call(()),
        _ => {}
    };

    rsx! {
        Modal {
            is_open,
            on_close,
            aria_label: Some("Image viewer".to_string()),
            class: Some("folio-lightbox".to_string()),
            div { tabindex: "-1", onkeydown: on_keydown, class: "outline-none",

                div { style: layout::HEADER,
                    div { class: "text-gray-400 text-sm",
                        if total > 1 {
                            {format!("{} / {}", idx + 1, total)}
                        }
                    }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                div { style: layout::STAGE,
                    div { style: layout::NAV_CELL,
                        NavButton {
                            direction: NavDirection::Previous,
                            onclick: move |_| on_prev.call(()),
                        }
                    }
                    div { style: layout::IMAGE_CELL,
                        img {
                            src: "{url}",
                            alt: "Selected image",
                            class: "object-contain bg-black",
                            style: "width: 800px; max-width: 100%; max-height: 450px; background: black;",
                        }
                    }
                    div { style: layout::NAV_CELL,
                        NavButton {
                            direction: NavDirection::Next,
                            onclick: move |_| on_next.call(()),
                        }
                    }
                }

                FilmstripView {
                    images,
                    strip,
                    dimmed_opacity,
                    on_prev,
                    on_next,
                }
            }
        }
    }
}
