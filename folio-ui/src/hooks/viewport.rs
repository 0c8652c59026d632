//! Window width tracking for breakpoint detection

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};

use crate::wasm_utils::{window_inner_width, WindowEventListener};

/// Hook reporting the window's `innerWidth` in CSS pixels.
///
/// `None` until the first measurement, then follows window `resize` events.
/// The listener is only attached while `enabled` is true and is detached when it
/// flips to false or the calling component unmounts. Classification against a
/// breakpoint is left to the caller so a changed breakpoint applies on the next
/// render without re-measuring.
pub fn use_window_width(enabled: bool) -> Option<f64> {
    let mut width: Signal<Option<f64>> = use_signal(|| None);
    let mut listener: Signal<Option<WindowEventListener>> = use_signal(|| None);

    // Runs after render: touching web_sys_x::window() during render breaks the
    // desktop IPC bridge.
    use_effect(use_reactive!(|(enabled,)| {
        if !enabled {
            if let Some(on_resize) = listener.write().take() {
                spawn(async move {
                    drop(on_resize);
                });
            }
            return;
        }
        if listener.peek().is_some() {
            return;
        }
        let Some(window) = web_sys_x::window() else {
            return;
        };

        width.set(window_inner_width(&window));

        // The resize callback fires from wasm-bindgen, outside the Dioxus runtime.
        let runtime = Runtime::current();
        let on_resize = WindowEventListener::new(window, "resize", move |_| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let measured = web_sys_x::window().as_ref().and_then(window_inner_width);
            // Signal may already be dropped if the component unmounted
            if let Ok(mut current) = width.try_write() {
                if *current != measured {
                    tracing::debug!("Window width changed to {:?}", measured);
                    *current = measured;
                }
            }
        });

        listener.set(Some(on_resize));
    }));

    use_drop(move || {
        // Detach outside the diff cycle; dropping during scope teardown would
        // make a synchronous IPC call on desktop.
        if let Some(on_resize) = listener.write().take() {
            spawn(async move {
                drop(on_resize);
            });
        }
    });

    width()
}
