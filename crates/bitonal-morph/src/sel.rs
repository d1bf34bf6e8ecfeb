//! Structuring element (SEL) for morphological operations
//!
//! A structuring element is a small binary kernel plus an anchor point. At
//! construction it precomputes the list of offsets to probe during
//! morphology: one `(dx, dy)` per ink kernel cell, relative to the origin.

use crate::{MorphError, MorphResult};
use bitonal_core::{BitImage, Pixel, Point};

/// Structuring element
///
/// The offsets are collected in row-major kernel order, which fixes the
/// order in which erosion and dilation probe neighbors (and therefore where
/// their early exits trigger). The origin is not validated against the
/// kernel bounds; an origin outside the kernel simply yields offsets that
/// all point the same way.
#[derive(Debug, Clone)]
pub struct Sel {
    width: u32,
    height: u32,
    origin: Point,
    offsets: Vec<(i32, i32)>,
}

impl Sel {
    /// Build a structuring element from a kernel and an anchor point.
    ///
    /// Every ink cell `(cx, cy)` of the kernel contributes the offset
    /// `(cx - origin.x, cy - origin.y)`.
    pub fn from_kernel(kernel: &BitImage, origin: Point) -> Self {
        let mut offsets = Vec::new();
        for y in 0..kernel.height() {
            for x in 0..kernel.width() {
                if kernel.pixel(x, y).is_ink() {
                    offsets.push((x as i32 - origin.x, y as i32 - origin.y));
                }
            }
        }
        Sel {
            width: kernel.width(),
            height: kernel.height(),
            origin,
            offsets,
        }
    }

    /// Create a rectangular all-ink element anchored at its center.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is 0.
    pub fn brick(width: u32, height: u32) -> MorphResult<Self> {
        let kernel = BitImage::new(width, height)?;
        let mut kernel_mut = kernel.try_into_mut().unwrap();
        kernel_mut.fill(Pixel::Ink);
        let origin = Point::new((width / 2) as i32, (height / 2) as i32);
        Ok(Sel::from_kernel(&kernel_mut.into(), origin))
    }

    /// Create a structuring element from a string pattern.
    ///
    /// Each line is one kernel row; `x` marks an ink cell and any other
    /// character is ignored background.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] for an empty pattern or lines of
    /// unequal length.
    pub fn from_string(pattern: &str, origin: Point) -> MorphResult<Self> {
        let lines: Vec<&str> = pattern.lines().collect();
        let height = lines.len();
        let width = lines.first().map_or(0, |l| l.len());
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel("empty pattern".to_string()));
        }

        let mut rows = Vec::with_capacity(height);
        for line in &lines {
            if line.len() != width {
                return Err(MorphError::InvalidSel(format!(
                    "line length {} does not match width {}",
                    line.len(),
                    width
                )));
            }
            rows.push(
                line.chars()
                    .map(|c| {
                        if c == 'x' {
                            Pixel::Ink
                        } else {
                            Pixel::Whitespace
                        }
                    })
                    .collect(),
            );
        }
        let kernel = BitImage::from_rows(&rows)?;
        Ok(Sel::from_kernel(&kernel, origin))
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the anchor point.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get the probe offsets, in row-major kernel order.
    #[inline]
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// Check whether the zero offset is part of the element.
    ///
    /// When it is, erosion shrinks and dilation grows the ink set
    /// (anti-extensivity / extensivity).
    pub fn covers_origin(&self) -> bool {
        self.offsets.contains(&(0, 0))
    }
}
