use crate::config::PageConfig;
use crate::error::{PackError, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle. `x,y` is the top-left corner; all fields share the
/// caller's page unit (inches, millimeters, points — the crate never cares).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
    pub fn area(&self) -> f64 {
        self.w * self.h
    }
    /// Returns true if `r` lies fully inside `self` (edges included).
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
}

/// A named print size, e.g. a 4x6. The name is an opaque label carried to the
/// output untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl PhotoSize {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Bounding dimensions after the cardinal rotation is applied.
    pub fn oriented(&self, rotation: Rotation) -> (f64, f64) {
        if rotation.is_sideways() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }
}

/// Cardinal rotation applied to a photo before placement. Rotation is an
/// input, never a decision the packer makes. Serializes as the degree value,
/// so wire formats carry `0 | 90 | 180 | 270` and reject everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn from_degrees(degrees: u16) -> Result<Self> {
        match degrees {
            0 => Ok(Self::R0),
            90 => Ok(Self::R90),
            180 => Ok(Self::R180),
            270 => Ok(Self::R270),
            other => Err(PackError::geometry(format!(
                "unsupported rotation {other}; expected 0, 90, 180 or 270"
            ))),
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// 90 and 270 swap the bounding box.
    pub fn is_sideways(self) -> bool {
        matches!(self, Self::R90 | Self::R270)
    }
}

impl TryFrom<u16> for Rotation {
    type Error = PackError;
    fn try_from(degrees: u16) -> Result<Self> {
        Self::from_degrees(degrees)
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> u16 {
        rotation.degrees()
    }
}

/// One copy to be placed. `id` and `payload` are opaque to the packer and
/// flow to the matching [`Placement`] untouched; id uniqueness is the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoInput<K = String, P = ()> {
    pub id: K,
    pub size: PhotoSize,
    #[serde(default)]
    pub rotation: Rotation,
    /// Higher priorities are placed first.
    #[serde(default)]
    pub priority: i32,
    pub payload: P,
}

impl<K, P> PhotoInput<K, P> {
    /// Bounding dimensions after rotation, without the spacing pad.
    pub fn effective_dims(&self) -> (f64, f64) {
        self.size.oriented(self.rotation)
    }
}

/// The output record for one placed photo. `x,y` is the top-left corner of
/// the photo itself (the spacing pad sits to its right and below), in page
/// coordinates with the origin at the page's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement<K = String, P = ()> {
    pub id: K,
    pub payload: P,
    pub size: PhotoSize,
    pub rotation: Rotation,
    pub x: f64,
    pub y: f64,
    pub effective_width: f64,
    pub effective_height: f64,
    pub page_index: usize,
}

/// Statistics about a finished layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutStats {
    pub num_pages: usize,
    pub num_placed: usize,
    pub num_rotated: usize,
    /// Sum of effective photo areas.
    pub used_area: f64,
    /// Sum of full page areas across all produced pages.
    pub total_page_area: f64,
    /// used_area / total_page_area (0.0 when there are no pages).
    pub occupancy: f64,
}

impl LayoutStats {
    pub fn compute<K, P>(placements: &[Placement<K, P>], config: &PageConfig) -> Self {
        let num_pages = placements
            .iter()
            .map(|p| p.page_index + 1)
            .max()
            .unwrap_or(0);
        let num_placed = placements.len();
        let num_rotated = placements
            .iter()
            .filter(|p| p.rotation.is_sideways())
            .count();
        let used_area: f64 = placements
            .iter()
            .map(|p| p.effective_width * p.effective_height)
            .sum();
        let total_page_area = num_pages as f64 * config.page_width * config.page_height;
        let occupancy = if total_page_area > 0.0 {
            used_area / total_page_area
        } else {
            0.0
        };
        Self {
            num_pages,
            num_placed,
            num_rotated,
            used_area,
            total_page_area,
            occupancy,
        }
    }

    /// Returns a human-readable one-line summary.
    pub fn summary(&self) -> String {
        format!(
            "Pages: {}, Photos: {}, Occupancy: {:.2}%, Rotated: {}",
            self.num_pages,
            self.num_placed,
            self.occupancy * 100.0,
            self.num_rotated,
        )
    }
}
