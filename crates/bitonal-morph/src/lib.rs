//! bitonal-morph - Binary morphology for two-level images
//!
//! This crate provides:
//!
//! - Structuring elements ([`Sel`]) built from a binary kernel and an
//!   anchor point
//! - Binary morphology: [`erode`], [`dilate`], and the derived [`open`]
//!   and [`close`]
//!
//! All operations produce a fresh [`bitonal_core::BitImage`]; inputs are
//! never mutated, so images and elements can be reused across calls.

pub mod binary;
mod error;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::Sel;

pub use binary::{close, dilate, erode, open};
