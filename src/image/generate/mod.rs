//! Procedural placeholder images.
//!
//! | Operation                     | Output                          |
//! |-------------------------------|---------------------------------|
//! | [`generate_icon_placeholder`] | square PNG, centered short text |
//! | [`generate_social_preview`]   | 1200x630 title/subtitle/rule    |
//!
//! Both skip without touching the destination when it already exists, so
//! hand-made assets are never overwritten.

mod icon;
mod social;

pub use icon::{IconStyle, generate_icon_placeholder};
pub use social::{SocialStyle, generate_social_preview};

/// Result of a generator call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generated {
    Created,
    /// Destination was already present; nothing was written.
    AlreadyExists,
}

/// Floor division, so off-canvas text still centers like the positive case.
fn centered(canvas: u32, content: u32) -> i32 {
    (i64::from(canvas) - i64::from(content)).div_euclid(2) as i32
}
