//! Core library for laying out fixed-size photos on printable pages.
//!
//! - Algorithms: Guillotine (first fit over an area-ordered free list),
//!   Shelf (left-to-right sweep), MaxRects (best short side fit)
//! - `pack` takes oriented photo rectangles plus a page geometry and returns
//!   exact placements with page indices; photos that do not fit are omitted.
//! - The data model is serde-serializable; JSON emission for document
//!   emitters lives in `export`.
//!
//! Quick example:
//! ```
//! use photo_packer_core::prelude::*;
//!
//! let config = PageConfig::builder().page_size(4.0, 6.0).margin(0.25).build();
//! let photos = vec![PhotoInput {
//!     id: "dog".to_string(),
//!     size: PhotoSize::new("2x3", 2.0, 3.0),
//!     rotation: Rotation::R0,
//!     priority: 0,
//!     payload: (),
//! }];
//! let placements = pack(photos, &config, Algorithm::MaxRects)?;
//! assert_eq!(placements.len(), 1);
//! assert_eq!((placements[0].x, placements[0].y), (0.25, 0.25));
//! # Ok::<(), photo_packer_core::PackError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `photo_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{Algorithm, PageConfig, PageConfigBuilder};
    pub use crate::error::PackError;
    pub use crate::export::{placements_by_page, to_json_array};
    pub use crate::model::{LayoutStats, PhotoInput, PhotoSize, Placement, Rect, Rotation};
    pub use crate::pipeline::{expand_quantities, pack};
}
