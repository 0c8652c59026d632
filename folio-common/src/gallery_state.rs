use crate::Viewport;

/// Why a selection was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("gallery has no images")]
    EmptyGallery,
    #[error("image index {index} out of range for gallery of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// View state of a gallery: whether the overlay is open and which image is selected.
///
/// Every transition consumes the current value and returns the next one, so the
/// widget holds a single `GalleryState` and swaps it wholesale on each event.
/// Transitions take the image count rather than the list itself; the state
/// never looks at URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryState {
    is_open: bool,
    selected: Option<usize>,
}

impl GalleryState {
    /// Closed, nothing selected.
    pub const fn new() -> Self {
        Self {
            is_open: false,
            selected: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Open the overlay on `index`.
    ///
    /// Rejects the selection (returning the error, state untouched by the caller)
    /// when the gallery is empty or `index` is past the end.
    pub fn select_thumbnail(self, index: usize, len: usize) -> Result<Self, GalleryError> {
        if len == 0 {
            return Err(GalleryError::EmptyGallery);
        }
        if index >= len {
            return Err(GalleryError::IndexOutOfRange { index, len });
        }
        Ok(Self {
            is_open: true,
            selected: Some(index),
        })
    }

    /// Advance one image, wrapping from the last back to the first.
    ///
    /// An unset selection counts as 0, so the first `next` from a fresh state
    /// lands on index 1 rather than 0. Possible off-by-one kept on purpose until
    /// product confirms which image should show first.
    pub fn navigate_next(self, len: usize) -> Self {
        if len == 0 {
            return self;
        }
        let current = self.selected.unwrap_or(0);
        Self {
            selected: Some((current + 1) % len),
            ..self
        }
    }

    /// Step back one image, wrapping from the first to the last.
    ///
    /// An unset selection counts as `len`, which makes the result `len - 1`.
    pub fn navigate_prev(self, len: usize) -> Self {
        if len == 0 {
            return self;
        }
        let current = self.selected.unwrap_or(len);
        Self {
            selected: Some((current + len - 1) % len),
            ..self
        }
    }

    /// Close the overlay and forget the selection.
    pub fn close_overlay(self) -> Self {
        Self::new()
    }

    /// Bring the state back in line with a (possibly shorter) image list.
    ///
    /// A selection at or past `len` closes the overlay instead of clamping, so an
    /// open overlay always points at a real image.
    pub fn reconcile(self, len: usize) -> Self {
        match self.selected {
            Some(index) if index >= len => self.close_overlay(),
            _ => self,
        }
    }

    /// Index the overlay should display, falling back to the first image when
    /// nothing is selected. `None` for an empty gallery.
    pub fn display_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.selected.unwrap_or(0).min(len - 1))
    }

    /// Whether the overlay is actually rendered.
    ///
    /// The overlay is suppressed on narrow viewports regardless of state, and never
    /// shown for an empty gallery.
    pub fn overlay_visible(&self, len: usize, viewport: Viewport) -> bool {
        self.is_open && len > 0 && viewport.shows_overlay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        let state = GalleryState::new();
        assert!(!state.is_open());
        assert_eq!(state.selected(), None);
        assert_eq!(state, GalleryState::default());
    }

    #[test]
    fn test_select_thumbnail_opens_on_index() {
        for len in 1..6 {
            for k in 0..len {
                let state = GalleryState::new().select_thumbnail(k, len).unwrap();
                assert!(state.is_open());
                assert_eq!(state.selected(), Some(k));
            }
        }
    }

    #[test]
    fn test_select_thumbnail_rejects_out_of_range() {
        let err = GalleryState::new().select_thumbnail(3, 3).unwrap_err();
        assert_eq!(err, GalleryError::IndexOutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn test_select_thumbnail_rejects_empty() {
        let err = GalleryState::new().select_thumbnail(0, 0).unwrap_err();
        assert_eq!(err, GalleryError::EmptyGallery);
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        for len in 1..8 {
            for start in 0..len {
                let opened = GalleryState::new().select_thumbnail(start, len).unwrap();
                let mut state = opened;
                for _ in 0..len {
                    state = state.navigate_next(len);
                }
                assert_eq!(state, opened, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_prev_undoes_next() {
        for len in 1..8 {
            for i in 0..len {
                let state = GalleryState::new().select_thumbnail(i, len).unwrap();
                assert_eq!(state.navigate_next(len).navigate_prev(len), state);
                assert_eq!(state.navigate_prev(len).navigate_next(len), state);
            }
        }
    }

    #[test]
    fn test_next_wraps_from_last() {
        let state = GalleryState::new().select_thumbnail(2, 3).unwrap();
        assert_eq!(state.navigate_next(3).selected(), Some(0));
    }

    #[test]
    fn test_prev_wraps_from_first() {
        let state = GalleryState::new().select_thumbnail(0, 3).unwrap();
        assert_eq!(state.navigate_prev(3).selected(), Some(2));
    }

    #[test]
    fn test_navigation_keeps_overlay_open() {
        let state = GalleryState::new().select_thumbnail(1, 4).unwrap();
        assert!(state.navigate_next(4).is_open());
        assert!(state.navigate_prev(4).is_open());
    }

    #[test]
    fn test_unset_selection_quirk() {
        let state = GalleryState::new();
        assert_eq!(state.navigate_next(5).selected(), Some(1));
        assert_eq!(state.navigate_prev(5).selected(), Some(4));
        // Single image: both directions stay on the only index
        assert_eq!(state.navigate_next(1).selected(), Some(0));
        assert_eq!(state.navigate_prev(1).selected(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_is_noop() {
        let state = GalleryState::new();
        assert_eq!(state.navigate_next(0), state);
        assert_eq!(state.navigate_prev(0), state);
    }

    #[test]
    fn test_close_resets_from_any_state() {
        let states = [
            GalleryState::new(),
            GalleryState::new().navigate_next(3),
            GalleryState::new().select_thumbnail(2, 3).unwrap(),
            GalleryState::new()
                .select_thumbnail(0, 3)
                .unwrap()
                .navigate_prev(3),
        ];
        for state in states {
            assert_eq!(state.close_overlay(), GalleryState::new());
        }
    }

    #[test]
    fn test_empty_gallery_never_opens() {
        let mut state = GalleryState::new();
        for step in 0..12 {
            state = match step % 4 {
                0 => state.select_thumbnail(step, 0).unwrap_or(state),
                1 => state.navigate_next(0),
                2 => state.navigate_prev(0),
                _ => state.close_overlay(),
            };
            assert!(!state.is_open());
            assert!(!state.overlay_visible(0, Viewport::Wide));
        }
    }

    #[test]
    fn test_display_index_defaults_to_first() {
        assert_eq!(GalleryState::new().display_index(3), Some(0));
        assert_eq!(GalleryState::new().display_index(0), None);
        let state = GalleryState::new().select_thumbnail(2, 3).unwrap();
        assert_eq!(state.display_index(3), Some(2));
    }

    #[test]
    fn test_overlay_hidden_on_narrow_viewport() {
        let state = GalleryState::new().select_thumbnail(1, 3).unwrap();
        assert!(state.overlay_visible(3, Viewport::Wide));
        assert!(!state.overlay_visible(3, Viewport::Narrow));
        assert!(!state.close_overlay().overlay_visible(3, Viewport::Wide));
    }

    #[test]
    fn test_reconcile_closes_when_list_shrinks_past_selection() {
        let state = GalleryState::new().select_thumbnail(4, 5).unwrap();
        let reconciled = state.reconcile(3);
        assert_eq!(reconciled, GalleryState::new());
        assert!(!reconciled.overlay_visible(3, Viewport::Wide));
    }

    #[test]
    fn test_reconcile_closes_when_list_empties() {
        let state = GalleryState::new().select_thumbnail(0, 2).unwrap();
        assert_eq!(state.reconcile(0), GalleryState::new());
    }

    #[test]
    fn test_reconcile_keeps_valid_selection() {
        let state = GalleryState::new().select_thumbnail(2, 5).unwrap();
        assert_eq!(state.reconcile(3), state);
        assert_eq!(state.reconcile(5), state);
        assert_eq!(GalleryState::new().reconcile(0), GalleryState::new());
    }

    #[test]
    fn test_redundant_transitions_leave_state_unchanged() {
        // The widget skips on_change when a transition returns an equal state.
        let closed = GalleryState::new();
        assert_eq!(closed.close_overlay(), closed);
        assert_eq!(closed.navigate_next(0), closed);
        let open = closed.select_thumbnail(1, 3).unwrap();
        assert_eq!(open.select_thumbnail(1, 3).unwrap(), open);
        // A single image stays put under next/prev.
        let single = closed.select_thumbnail(0, 1).unwrap();
        assert_eq!(single.navigate_next(1), single);
        assert_eq!(single.navigate_prev(1), single);
    }
}
