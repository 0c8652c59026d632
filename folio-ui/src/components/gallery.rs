//! Image gallery: thumbnail grid plus lightbox overlay

use dioxus::prelude::*;
use folio_common::{GalleryConfig, GalleryState, Viewport};
use tracing::{debug, warn};

use super::{GalleryLightbox, ThumbnailGrid};
use crate::hooks::use_window_width;

/// Gallery widget owning its own view state.
///
/// Clicking a tile opens the overlay on that image; prev/next wrap around the
/// ends; closing forgets the selection. On narrow viewports the overlay is never
/// rendered, only the single-column grid.
#[component]
pub fn GalleryWidget(
    /// Image URLs in display order
    images: Vec<String>,
    #[props(default)] config: GalleryConfig,
    /// Skip breakpoint detection and render for this viewport
    #[props(default)]
    viewport_override: Option<Viewport>,
    /// Called with the new state after every transition
    #[props(default)]
    on_change: Option<EventHandler<GalleryState>>,
) -> Element {
    let mut state = use_signal(GalleryState::new);
    // No resize listener while the caller pins the viewport.
    let width = use_window_width(viewport_override.is_none());
    let viewport = viewport_override
        .unwrap_or_else(|| Viewport::from_measured(width, config.breakpoint_px));
    let len = images.len();

    let mut apply = move |next: GalleryState| {
        if next == *state.peek() {
            return;
        }
        debug!(
            "Gallery state: open={} selected={:?}",
            next.is_open(),
            next.selected()
        );
        state.set(next);
        if let Some(handler) = on_change {
            handler.call(next);
        }
    };

    // Copy the state out before transitioning; a live read guard would
    // conflict with the write in `apply`.
    let on_select = move |index: usize| {
        let current = *state.peek();
        match current.select_thumbnail(index, len) {
            Ok(next) => apply(next),
            Err(e) => warn!("Ignoring thumbnail click: {}", e),
        }
    };
    let on_next = move |_: ()| {
        let current = *state.peek();
        apply(current.navigate_next(len));
    };
    let on_prev = move |_: ()| {
        let current = *state.peek();
        apply(current.navigate_prev(len));
    };
    let on_close = move |_: ()| {
        let current = *state.peek();
        apply(current.close_overlay());
    };

    let stored = *state.read();
    let current = stored.reconcile(len);
    if current != stored {
        debug!("Image list shrank to {}, closing overlay", len);
        state.set(current);
    }

    // The dialog element stays mounted on wide viewports; this signal drives
    // its showModal()/close() calls.
    let mut overlay_open = use_signal(|| false);
    let visible = current.overlay_visible(len, viewport);
    if *overlay_open.peek() != visible {
        overlay_open.set(visible);
    }
    let is_open: ReadSignal<bool> = overlay_open.into();

    rsx! {
        div { class: "folio-gallery",
            ThumbnailGrid {
                images: images.clone(),
                viewport,
                columns: config.columns(viewport),
                hints: config.thumbnail,
                on_select,
            }
            if viewport.shows_overlay() && len > 0 {
                GalleryLightbox {
                    is_open,
                    images,
                    state: current,
                    dimmed_opacity: config.dimmed_opacity,
                    on_close,
                    on_prev,
                    on_next,
                }
            }
        }
    }
}
