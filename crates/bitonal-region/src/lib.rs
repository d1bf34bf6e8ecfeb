//! bitonal-region - Connected region analysis for two-level images
//!
//! This crate partitions the pixels of a [`bitonal_core::BitImage`] into
//! connected regions with a single raster-order scan over a disjoint-set
//! forest, then exposes per-region geometry:
//!
//! - [`label_regions`] - run the labeler, producing a [`Labeling`]
//! - [`Region`] - coordinate set, bounding rectangle, pixel density
//! - [`Labeling::minimize_regions`] - containment-based region condensing
//!
//! # Examples
//!
//! ```
//! use bitonal_core::{BitImage, Pixel};
//! use bitonal_region::label_regions;
//!
//! let image = BitImage::new(8, 8).unwrap();
//! let mut m = image.try_into_mut().unwrap();
//! m.set(3, 3, Pixel::Ink);
//! m.set(4, 3, Pixel::Ink);
//! let image: BitImage = m.into();
//!
//! let labeling = label_regions(&image);
//! assert_eq!(labeling.regions().len(), 1);
//! assert_eq!(labeling.regions()[0].pixel_count(), 2);
//! ```

mod equiv;
pub mod label;
pub mod region;

pub use label::{BACKGROUND_ID, Labeling, label_regions};
pub use region::Region;
