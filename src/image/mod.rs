//! Image processing utilities.
//!
//! # Modules
//!
//! - [`svg`]: SVG rasterization (Vector Rasterizer)
//! - [`generate`]: procedural icons and social preview (Synthetic Image Generator)
//! - [`text`]: font fallback, text measurement and drawing
//! - [`canvas`]: the per-job drawing surface
//! - [`encode`]: PNG/JPEG encoding and atomic output

pub mod canvas;
pub mod color;
pub mod encode;
pub mod error;
pub mod generate;
pub mod svg;
pub mod text;

pub use color::Rgb;
pub use error::AssetError;
