//! Three-frame strip under the large image

use dioxus::prelude::*;
use folio_common::{Filmstrip, FramePosition};

use crate::layout;

#[component]
pub fn FilmstripView(
    images: Vec<String>,
    strip: Filmstrip,
    /// Opacity of the previous/next frames
    dimmed_opacity: f32,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "folio-filmstrip", style: layout::FILMSTRIP,
            for frame in strip.frames() {
                {
                    let url = images.get(frame.index).cloned().unwrap_or_default();
                    let (size, opacity, cursor) = if frame.position.is_dimmed() {
                        ("width: 200px; height: 113px;", dimmed_opacity, "cursor: pointer;")
                    } else {
                        ("width: 250px; height: 141px;", 1.0, "")
                    };
                    let position = frame.position;
                    rsx! {
                        img {
                            key: "{position:?}",
                            src: "{url}",
                            alt: position.alt_text(),
                            class: "object-contain bg-black",
                            style: "{size} opacity: {opacity}; object-fit: contain; background: black; {cursor}",
                            onclick: move |e| {
                                e.stop_propagation();
                                match position {
                                    FramePosition::Previous => on_prev.call(()),
                                    FramePosition::Next => on_next.call(()),
                                    FramePosition::Current => {}
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
