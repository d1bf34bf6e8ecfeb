//! Color-to-binary thresholding
//!
//! Converts a 32-bit BGRA pixel buffer (the layout common bitmap decoders
//! hand out) into the packed 1-bit-per-pixel format that
//! [`bitonal_core::BitImage::from_packed_1bpp`] ingests.
//!
//! A pixel whose B+G+R channel sum exceeds the threshold is bright paper:
//! its bit is set (whitespace). Dark pixels keep a clear bit (ink).

use crate::{ColorError, ColorResult};
use bitonal_core::BitImage;

/// Fixed-threshold binarizer
///
/// The threshold ranges over the channel sum 0-765; the default of 500
/// classifies typical scanned paper as whitespace and print as ink.
#[derive(Debug, Clone, Copy)]
pub struct Binarizer {
    /// Channel-sum threshold above which a pixel is whitespace
    pub threshold: u32,
}

impl Default for Binarizer {
    fn default() -> Self {
        Self { threshold: 500 }
    }
}

impl Binarizer {
    /// Create a binarizer with an explicit threshold.
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Threshold a BGRA buffer into a packed 1-bpp buffer.
    ///
    /// `stride` is the source row pitch in bytes (at least `4 * width`).
    /// Returns the packed bytes and their row stride: MSB-first bits,
    /// 8 pixels per byte, rows padded to a byte boundary.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::BadBuffer`] if the stride is too small or the
    /// buffer is shorter than `stride * height`.
    pub fn binarize(
        &self,
        bgra: &[u8],
        width: u32,
        height: u32,
        stride: usize,
    ) -> ColorResult<(Vec<u8>, usize)> {
        let min_stride = 4 * width as usize;
        if stride < min_stride {
            return Err(ColorError::BadBuffer(format!(
                "source stride {} too small for width {} (need at least {})",
                stride, width, min_stride
            )));
        }
        let needed = stride * height as usize;
        if bgra.len() < needed {
            return Err(ColorError::BadBuffer(format!(
                "source buffer holds {} bytes, need {} for {}x{} at stride {}",
                bgra.len(),
                needed,
                width,
                height,
                stride
            )));
        }

        let out_stride = width.div_ceil(8) as usize;
        let mut packed = vec![0u8; out_stride * height as usize];
        for y in 0..height as usize {
            let src_row = &bgra[y * stride..];
            let dst_row = &mut packed[y * out_stride..(y + 1) * out_stride];
            for x in 0..width as usize {
                let b = src_row[4 * x] as u32;
                let g = src_row[4 * x + 1] as u32;
                let r = src_row[4 * x + 2] as u32;
                if b + g + r > self.threshold {
                    dst_row[x >> 3] |= 0x80 >> (x & 7);
                }
            }
        }
        Ok((packed, out_stride))
    }

    /// Threshold a BGRA buffer straight into a [`BitImage`].
    pub fn binarize_to_image(
        &self,
        bgra: &[u8],
        width: u32,
        height: u32,
        stride: usize,
    ) -> ColorResult<BitImage> {
        let (packed, out_stride) = self.binarize(bgra, width, height, stride)?;
        Ok(BitImage::from_packed_1bpp(
            &packed, width, height, out_stride,
        )?)
    }
}
