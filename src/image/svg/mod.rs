//! SVG processing.
//!
//! ```text
//! SVG source (disk)
//!         │
//!         ▼
//!    ┌─────────┐
//!    │ convert │ ──► usvg parse + resvg render at target size
//!    └────┬────┘
//!         │
//!         ▼
//!    ┌────────┐
//!    │ encode │ ──► PNG/JPEG by extension, atomic write
//!    └────────┘
//! ```

mod convert;

pub use convert::{Rasterize, ResvgRasterizer, rasterize_file};

#[cfg(test)]
pub use convert::TargetSize;
