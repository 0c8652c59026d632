//! Modal built on the native HTML `<dialog>` element
//!
//! `showModal()` gives the overlay top-layer rendering, a focus trap, Escape to
//! close and a `::backdrop` for free. The dialog toggles its own `display`, so
//! layout classes go on the inner container, never on the dialog itself.
//!
//! `showModal()` throws when the dialog is already open, hence the `open`
//! attribute check before each call.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

use crate::layout;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Call a zero-argument method (`showModal` / `close`) on the dialog element.
fn call_dialog_method(element: &web_sys_x::Element, method: &str) {
    let Ok(func) = js_sys_x::Reflect::get(element, &method.into()) else {
        return;
    };
    if let Some(func) = func.dyn_ref::<js_sys_x::Function>() {
        if func.call0(element).is_err() {
            tracing::warn!("dialog.{}() failed", method);
        }
    }
}

/// Modal dialog used for the gallery overlay
#[component]
pub fn Modal(
    /// Controls whether the modal is open
    is_open: ReadSignal<bool>,
    /// Called on Escape or a click outside the content
    on_close: EventHandler<()>,
    children: Element,
    /// Accessible label for the dialog
    #[props(default)]
    aria_label: Option<String>,
    /// Extra classes for the content panel
    #[props(default)]
    class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("folio-modal-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let should_open = is_open();

        let Some(element) = web_sys_x::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        let currently_open = element.has_attribute("open");
        match (should_open, currently_open) {
            (true, false) => call_dialog_method(&element, "showModal"),
            (false, true) => call_dialog_method(&element, "close"),
            _ => {}
        }
    });

    let panel_class = class.unwrap_or_default();

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "folio-modal",
            style: layout::DIALOG,
            aria_label: aria_label.as_deref(),
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    style: layout::BACKDROP,
                    onclick: move |_| on_close.call(()),
                    div {
                        class: "{panel_class}",
                        style: layout::PANEL,
                        onclick: move |evt| evt.stop_propagation(),
                        {children}
                    }
                }
            }
        }
    }
}
