//! Always-visible grid of thumbnails

use dioxus::prelude::*;
use folio_common::{ImageHints, Viewport};

use super::icons::ImageIcon;

/// Grid with one clickable tile per image.
///
/// Tiles ask the image host for a cropped rendition (plus a 2x srcset) and load
/// lazily. An empty list renders no tiles, only a muted placeholder.
#[component]
pub fn ThumbnailGrid(
    images: Vec<String>,
    viewport: Viewport,
    columns: u32,
    hints: ImageHints,
    /// Called with the tile's index
    on_select: EventHandler<usize>,
) -> Element {
    let (grid_display, tile_size) = match viewport {
        Viewport::Narrow => ("inline-block", "width: 300px; max-height: 169px; padding-bottom: 5px;"),
        Viewport::Wide => ("grid", "width: 385px; max-height: 217px;"),
    };
    let grid_style = format!(
        "display: {grid_display}; grid-template-columns: repeat({columns}, minmax(0, 1fr)); gap: 4px;"
    );

    rsx! {
        ul { class: "folio-grid list-none p-0 m-0", style: "{grid_style}",
            for (index , url) in images.iter().enumerate() {
                li {
                    key: "{url}-{index}",
                    class: "folio-tile cursor-pointer",
                    onclick: move |_| on_select.call(index),
                    img {
                        src: hints.src(url),
                        srcset: hints.srcset(url),
                        alt: "Project image",
                        loading: "lazy",
                        class: "object-contain bg-black",
                        style: "{tile_size}",
                    }
                }
            }
        }
        if images.is_empty() {
            div { class: "folio-empty flex items-center gap-2 text-gray-500 text-sm py-4",
                ImageIcon { class: "w-5 h-5" }
                "No images"
            }
        }
    }
}
