use serde::{Deserialize, Serialize};

/// How the image service should fit an image into the requested box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    #[default]
    Crop,
    Clip,
    Max,
    Fill,
}

impl ImageFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFit::Crop => "crop",
            ImageFit::Clip => "clip",
            ImageFit::Max => "max",
            ImageFit::Fill => "fill",
        }
    }
}

/// Size and fit hints appended to an image URL as query parameters.
///
/// The gallery does not resize anything itself; it asks the image host for a
/// rendition via `w`, `h`, `fit`, `auto=format` and, for the srcset, `dpr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHints {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub fit: ImageFit,
}

impl Default for ImageHints {
    fn default() -> Self {
        Self::thumbnail()
    }
}

impl ImageHints {
    /// Grid tile rendition
    pub const fn thumbnail() -> Self {
        Self {
            width: 164,
            height: 164,
            fit: ImageFit::Crop,
        }
    }

    /// URL for the 1x rendition.
    pub fn src(&self, url: &str) -> String {
        format!("{url}{}{}", query_separator(url), self.query())
    }

    /// `srcset` value carrying the 2x rendition.
    pub fn srcset(&self, url: &str) -> String {
        format!("{url}{}{}&dpr=2 2x", query_separator(url), self.query())
    }

    fn query(&self) -> String {
        format!(
            "w={}&h={}&fit={}&auto=format",
            self.width,
            self.height,
            self.fit.as_str()
        )
    }
}

fn query_separator(url: &str) -> char {
    if url.contains('?') {
        '&'
    } else {
        '?'
    }
}
