//! bitonal-color - Color collaborators for the bitonal engine
//!
//! The analytic core operates exclusively on two-level images; this crate
//! holds the pointwise collaborators on either side of it:
//!
//! - [`Binarizer`] - fixed-threshold conversion of BGRA buffers into the
//!   packed 1-bpp interchange format
//! - [`render_bilevel`] / [`render_regions`] - RGBA debug rendering, with
//!   an explicit per-region color table

pub mod coloring;
mod error;
pub mod threshold;

pub use coloring::{region_color, render_bilevel, render_regions};
pub use error::{ColorError, ColorResult};
pub use threshold::Binarizer;
