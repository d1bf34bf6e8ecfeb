//! Bitonal Core - Basic data structures for two-level image analysis
//!
//! This crate provides the fundamental data structures used throughout the
//! bitonal image analysis engine:
//!
//! - [`BitImage`] / [`BitImageMut`] - the two-level image container
//!   (immutable / mutable builder)
//! - [`Pixel`] - the two-valued pixel domain (ink / whitespace)
//! - [`Point`] / [`Box`] - planar coordinates and rectangle regions
//!
//! `BitImage` instances are long-lived, reusable, read-only inputs: they are
//! safe to share across repeated morphology and labeling calls.

pub mod bitimage;
pub mod error;
pub mod geometry;

pub use bitimage::{BitImage, BitImageMut, Pixel};
pub use error::{Error, Result};
pub use geometry::{Box, Point};
