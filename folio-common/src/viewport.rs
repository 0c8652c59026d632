/// Coarse viewport class the gallery lays itself out for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    /// Below the small-screen breakpoint: single column, no overlay
    Narrow,
    #[default]
    Wide,
}

impl Viewport {
    /// Classify a viewport width in CSS pixels. Narrow is strictly below the breakpoint.
    pub fn from_width(width: f64, breakpoint_px: u32) -> Self {
        if width < f64::from(breakpoint_px) {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }

    /// Classify a measured width, assuming wide before anything was measured.
    pub fn from_measured(width: Option<f64>, breakpoint_px: u32) -> Self {
        width.map_or(Viewport::Wide, |w| Viewport::from_width(w, breakpoint_px))
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self, Viewport::Narrow)
    }

    /// Narrow screens get the grid only.
    pub fn shows_overlay(&self) -> bool {
        !self.is_narrow()
    }
}
