//! Binary morphological operations
//!
//! Implements erosion, dilation, opening, and closing for two-level images.
//!
//! Boundary handling is asymmetric in the usual way: offsets that land
//! outside the image never contribute. For dilation they simply cannot
//! match; for erosion they disqualify the pixel, so ink touching the image
//! border shrinks.

use crate::{MorphResult, Sel};
use bitonal_core::{BitImage, Pixel};

/// Dilate an image with the given structuring element.
///
/// The result pixel at (x, y) is ink iff some offset `(dx, dy)` lands
/// in-bounds on an ink pixel - the logical OR of the translated element.
/// The probe short-circuits on the first matching offset.
pub fn dilate(image: &BitImage, sel: &Sel) -> MorphResult<BitImage> {
    let w = image.width();
    let h = image.height();
    let out = BitImage::new(w, h)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..h {
        for x in 0..w {
            let hit = sel.offsets().iter().any(|&(dx, dy)| {
                probe(image, x as i32 + dx, y as i32 + dy) == Some(Pixel::Ink)
            });
            if hit {
                out_mut.set(x, y, Pixel::Ink);
            }
        }
    }

    Ok(out_mut.into())
}

/// Erode an image with the given structuring element.
///
/// The result pixel at (x, y) is ink iff the source pixel is ink and every
/// offset lands in-bounds on an ink pixel. Non-ink source pixels produce
/// whitespace without probing; the probe short-circuits on the first
/// out-of-bounds or non-ink neighbor.
pub fn erode(image: &BitImage, sel: &Sel) -> MorphResult<BitImage> {
    let w = image.width();
    let h = image.height();
    let out = BitImage::new(w, h)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for y in 0..h {
        for x in 0..w {
            if !image.pixel(x, y).is_ink() {
                continue;
            }
            let survives = sel.offsets().iter().all(|&(dx, dy)| {
                probe(image, x as i32 + dx, y as i32 + dy) == Some(Pixel::Ink)
            });
            if survives {
                out_mut.set(x, y, Pixel::Ink);
            }
        }
    }

    Ok(out_mut.into())
}

/// Open an image: erosion followed by dilation.
///
/// Removes ink features smaller than the element. Applying it twice with
/// the same element gives the same result as applying it once.
pub fn open(image: &BitImage, sel: &Sel) -> MorphResult<BitImage> {
    let eroded = erode(image, sel)?;
    dilate(&eroded, sel)
}

/// Close an image: dilation followed by erosion.
///
/// Fills whitespace gaps smaller than the element. Idempotent like [`open`].
pub fn close(image: &BitImage, sel: &Sel) -> MorphResult<BitImage> {
    let dilated = dilate(image, sel)?;
    erode(&dilated, sel)
}

/// Read a pixel at signed coordinates, `None` when outside the image.
#[inline]
fn probe(image: &BitImage, x: i32, y: i32) -> Option<Pixel> {
    if x < 0 || y < 0 {
        return None;
    }
    image.get(x as u32, y as u32)
}
