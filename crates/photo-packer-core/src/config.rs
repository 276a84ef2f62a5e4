use crate::error::{PackError, Result};
use crate::model::Rect;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Packing algorithms.
///
/// All three share the same input preparation (priority-first stable sort)
/// and the same page policy; they differ in how free space is tracked and
/// which free region hosts the next photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First fit over an area-ordered free list with guillotine splits.
    Guillotine,
    /// Left-to-right, top-to-bottom sweep over horizontal shelves.
    Shelf,
    /// Best-short-side-fit over a pruned free list (host-only split variant).
    MaxRects,
}

impl FromStr for Algorithm {
    type Err = PackError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "guillotine" => Ok(Self::Guillotine),
            "shelf" => Ok(Self::Shelf),
            "maxrects" => Ok(Self::MaxRects),
            other => Err(PackError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Page geometry and placement policy. All lengths share one linear unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width: f64,
    pub page_height: f64,
    #[serde(default)]
    pub margin_top: f64,
    #[serde(default)]
    pub margin_right: f64,
    #[serde(default)]
    pub margin_bottom: f64,
    #[serde(default)]
    pub margin_left: f64,
    /// Minimum clearance reserved to the right of and below each photo.
    /// One-sided, so neighboring photos never double-count the gap.
    #[serde(default)]
    pub spacing: f64,
    /// Open a new page when a photo does not fit the current one; when
    /// false, such photos are dropped from the output instead.
    #[serde(default = "default_multi_page")]
    pub multi_page: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_width: 8.5,
            page_height: 11.0,
            margin_top: 0.25,
            margin_right: 0.25,
            margin_bottom: 0.25,
            margin_left: 0.25,
            spacing: 0.0,
            multi_page: default_multi_page(),
        }
    }
}

fn default_multi_page() -> bool {
    true
}

impl PageConfig {
    /// Validates the page geometry.
    ///
    /// Returns `InvalidGeometry` if dimensions are not positive, any margin
    /// or the spacing is negative, or the margins leave no printable area.
    pub fn validate(&self) -> Result<()> {
        if !(self.page_width > 0.0) || !(self.page_height > 0.0) {
            return Err(PackError::geometry(format!(
                "page dimensions must be positive (got {}x{})",
                self.page_width, self.page_height
            )));
        }
        let margins = [
            ("margin_top", self.margin_top),
            ("margin_right", self.margin_right),
            ("margin_bottom", self.margin_bottom),
            ("margin_left", self.margin_left),
        ];
        for (name, value) in margins {
            if !(value >= 0.0) {
                return Err(PackError::geometry(format!(
                    "{name} must be non-negative (got {value})"
                )));
            }
        }
        if !(self.spacing >= 0.0) {
            return Err(PackError::geometry(format!(
                "spacing must be non-negative (got {})",
                self.spacing
            )));
        }
        self.printable_area().map(|_| ())
    }

    /// The page rect left over after margins; placements live inside it.
    pub fn printable_area(&self) -> Result<Rect> {
        let w = self.page_width - self.margin_left - self.margin_right;
        let h = self.page_height - self.margin_top - self.margin_bottom;
        if !(w > 0.0) || !(h > 0.0) {
            return Err(PackError::geometry(format!(
                "margins leave no printable area ({w}x{h} on a {}x{} page)",
                self.page_width, self.page_height
            )));
        }
        Ok(Rect::new(self.margin_left, self.margin_top, w, h))
    }

    /// Create a fluent builder for `PageConfig`.
    pub fn builder() -> PageConfigBuilder {
        PageConfigBuilder::new()
    }
}

/// Builder for [`PageConfig`] for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PageConfigBuilder {
    cfg: PageConfig,
}

impl PageConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PageConfig::default(),
        }
    }
    pub fn page_size(mut self, width: f64, height: f64) -> Self {
        self.cfg.page_width = width;
        self.cfg.page_height = height;
        self
    }
    /// Sets all four margins to the same value.
    pub fn margin(mut self, value: f64) -> Self {
        self.cfg.margin_top = value;
        self.cfg.margin_right = value;
        self.cfg.margin_bottom = value;
        self.cfg.margin_left = value;
        self
    }
    pub fn margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.cfg.margin_top = top;
        self.cfg.margin_right = right;
        self.cfg.margin_bottom = bottom;
        self.cfg.margin_left = left;
        self
    }
    pub fn spacing(mut self, value: f64) -> Self {
        self.cfg.spacing = value;
        self
    }
    pub fn multi_page(mut self, value: bool) -> Self {
        self.cfg.multi_page = value;
        self
    }
    pub fn build(self) -> PageConfig {
        self.cfg
    }
}
