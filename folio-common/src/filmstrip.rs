use crate::GalleryState;

/// Slot of a frame within the filmstrip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePosition {
    Previous,
    Current,
    Next,
}

impl FramePosition {
    pub fn alt_text(&self) -> &'static str {
        match self {
            FramePosition::Previous => "Previous image",
            FramePosition::Current => "Selected image",
            FramePosition::Next => "Next image",
        }
    }

    /// Neighbours are dimmed and clickable, the current frame is neither.
    pub fn is_dimmed(&self) -> bool {
        !matches!(self, FramePosition::Current)
    }
}

/// One image in the filmstrip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilmstripFrame {
    pub index: usize,
    pub position: FramePosition,
}

/// The three-image strip under the large image: previous, current, next.
///
/// Neighbours wrap around the ends, so a gallery of one shows the same image
/// in all three slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filmstrip {
    pub previous: usize,
    pub current: usize,
    pub next: usize,
}

impl Filmstrip {
    /// Strip centred on whatever the overlay displays. `None` for an empty gallery.
    pub fn around(state: &GalleryState, len: usize) -> Option<Self> {
        let current = state.display_index(len)?;
        Some(Self {
            previous: (current + len - 1) % len,
            current,
            next: (current + 1) % len,
        })
    }

    pub fn frames(&self) -> [FilmstripFrame; 3] {
        [
            FilmstripFrame {
                index: self.previous,
                position: FramePosition::Previous,
            },
            FilmstripFrame {
                index: self.current,
                position: FramePosition::Current,
            },
            FilmstripFrame {
                index: self.next,
                position: FramePosition::Next,
            },
        ]
    }
}
