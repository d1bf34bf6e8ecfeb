//! Bitonal - binary image analysis for Rust
//!
//! An engine for two-level (bi-level) images: morphological filtering with
//! arbitrary structuring elements, and connected region extraction with
//! per-region geometry.
//!
//! # Overview
//!
//! - Two-level image container with value semantics ([`BitImage`])
//! - Binary morphology: erosion, dilation, opening, closing
//! - Single-pass region labeling over a disjoint-set forest, with
//!   bounding boxes, pixel density, and containment minimization
//! - Thresholding into and RGBA rendering out of the binary domain
//!
//! # Example
//!
//! ```
//! use bitonal::{BitImage, Pixel};
//! use bitonal::morph::{Sel, close};
//! use bitonal::region::label_regions;
//!
//! let image = BitImage::new(32, 32).unwrap();
//! let mut m = image.try_into_mut().unwrap();
//! for x in 10..20 {
//!     m.set(x, 10, Pixel::Ink);
//!     m.set(x, 12, Pixel::Ink);
//! }
//! let image: BitImage = m.into();
//!
//! // Bridge the two strokes, then extract regions
//! let sel = Sel::brick(3, 3).unwrap();
//! let cleaned = close(&image, &sel).unwrap();
//! let labeling = label_regions(&cleaned);
//! assert_eq!(labeling.regions().len(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bitonal_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bitonal_color as color;
pub use bitonal_morph as morph;
pub use bitonal_region as region;
