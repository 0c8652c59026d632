//! Structural inline styles
//!
//! The components must lay out correctly with no host stylesheet, so anything
//! positional (backdrop coverage, the three-column stage, the filmstrip row) is
//! written as inline `style`. Classes on the same elements are cosmetic only.

/// `<dialog>` reset: drop the UA border/padding/size caps so the backdrop layer
/// can cover the whole viewport.
pub const DIALOG: &str = "padding: 0; border: none; background: transparent; \
     width: 100vw; height: 100vh; max-width: 100vw; max-height: 100vh; overflow: hidden;";

/// Full-viewport layer inside the dialog; clicks that land here close the modal.
pub const BACKDROP: &str = "position: fixed; inset: 0; display: flex; \
     align-items: center; justify-content: center;";

/// Content panel centred on the backdrop.
pub const PANEL: &str = "max-width: min(1200px, 95vw); max-height: 95vh; overflow: auto;";

/// Row holding the counter on the left and the close control on the right.
pub const HEADER: &str = "display: flex; align-items: center; justify-content: space-between; \
     margin-bottom: 8px;";

/// Prev button, large image, next button side by side (1 / 10 / 1 columns).
pub const STAGE: &str = "display: grid; grid-template-columns: 1fr 10fr 1fr; align-items: stretch;";

/// Cell holding a prev/next button; the button fills it.
pub const NAV_CELL: &str = "display: flex; align-items: stretch;";

/// Cell holding the large image.
pub const IMAGE_CELL: &str = "display: flex; justify-content: center; align-items: center;";

/// Button filling a nav cell.
pub const NAV_BUTTON: &str = "display: flex; align-items: center; justify-content: center; \
     width: 100%; height: 100%; background: transparent; border: none; cursor: pointer;";

/// Three filmstrip frames in one centred row.
pub const FILMSTRIP: &str = "display: flex; justify-content: center; align-items: center; \
     gap: 10px; margin-top: 20px;";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_covers_viewport() {
        assert!(BACKDROP.contains("position: fixed"));
        assert!(BACKDROP.contains("inset: 0"));
        assert!(DIALOG.contains("max-width: 100vw"));
        assert!(DIALOG.contains("max-height: 100vh"));
    }

    #[test]
    fn test_nav_buttons_flank_image() {
        assert!(STAGE.contains("display: grid"));
        assert!(STAGE.contains("grid-template-columns: 1fr 10fr 1fr"));
        assert!(NAV_BUTTON.contains("height: 100%"));
    }

    #[test]
    fn test_filmstrip_is_one_row() {
        assert!(FILMSTRIP.contains("display: flex"));
        assert!(FILMSTRIP.contains("gap: 10px"));
    }

    #[test]
    fn test_styles_are_well_formed() {
        for style in [
            DIALOG, BACKDROP, PANEL, HEADER, STAGE, NAV_CELL, IMAGE_CELL, NAV_BUTTON, FILMSTRIP,
        ] {
            assert!(style.trim_end().ends_with(';'), "{style}");
            assert!(!style.contains("  "), "{style}");
        }
    }
}
