//! Screenshot naming and capture regions.

use serde::{Deserialize, Serialize};

/// Derives deterministic capture filenames for one suite.
///
/// Names follow `<slug>-<stage>-<width>-<height>.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureNamer {
    slug: String,
}

impl CaptureNamer {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// # Example
    ///
    /// ```
    /// use waypoint_config::CaptureNamer;
    ///
    /// let namer = CaptureNamer::new("bloomberg-home-page");
    /// assert_eq!(
    ///     namer.name_for("home-page", 1600, 900),
    ///     "bloomberg-home-page-home-page-1600-900.png"
    /// );
    /// ```
    pub fn name_for(&self, stage: &str, width: u32, height: u32) -> String {
        format!("{}-{stage}-{width}-{height}.png", self.slug)
    }
}

/// Rectangle of the page captured into an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    /// The whole viewport, anchored at the top-left corner.
    pub fn viewport(width: u32, height: u32) -> Self {
        Self {
            top: 0,
            left: 0,
            width,
            height,
        }
    }
}
