//! WASM utilities for browser interop
//!
//! A JS listener backed by a Rust `Closure` must not outlive the closure, and
//! `Closure::forget()` would leak it and leave the listener attached forever.
//! `WindowEventListener` owns the closure and detaches it on drop, so storing it
//! in a `Signal<Option<WindowEventListener>>` ties the listener to a component:
//!
//! ```ignore
//! let listener = WindowEventListener::new(window, "resize", callback);
//! // ...
//! drop(listener); // removeEventListener runs here
//! ```

use wasm_bindgen_x::prelude::*;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys_x::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl WindowEventListener {
    pub fn new(
        window: web_sys_x::Window,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        if window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach window '{}' listener", event_name);
        }

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Current `window.innerWidth` in CSS pixels, if the host exposes it.
pub fn window_inner_width(window: &web_sys_x::Window) -> Option<f64> {
    window.inner_width().ok().and_then(|w| w.as_f64())
}
