//! Debug rendering of bi-level images and labeled regions
//!
//! Produces RGBA byte buffers (4 bytes per pixel, row-major, no padding)
//! that collaborators can hand to any raster encoder.

use bitonal_core::BitImage;
use bitonal_region::{BACKGROUND_ID, Labeling};

/// Explicit color table for region rendering, cycled by region id.
///
/// Kept away from very light values so regions stay visible against the
/// white background.
const PALETTE: [(u8, u8, u8); 12] = [
    (0xC8, 0x00, 0x00), // red
    (0x00, 0x78, 0x00), // green
    (0x00, 0x00, 0xC8), // blue
    (0xC8, 0x96, 0x00), // amber
    (0x78, 0x00, 0xA0), // purple
    (0x00, 0x96, 0x96), // teal
    (0xC8, 0x50, 0x00), // orange
    (0x96, 0x00, 0x50), // magenta
    (0x50, 0x78, 0x00), // olive
    (0x00, 0x50, 0xA0), // steel blue
    (0x78, 0x3C, 0x00), // brown
    (0x3C, 0x3C, 0x3C), // dark gray
];

/// Get the render color for a region id.
///
/// The background id is always white; other ids cycle the palette.
pub fn region_color(id: u32) -> (u8, u8, u8) {
    if id == BACKGROUND_ID {
        (0xFF, 0xFF, 0xFF)
    } else {
        PALETTE[(id as usize - 1) % PALETTE.len()]
    }
}

/// Render a bi-level image as RGBA: ink black, whitespace white.
pub fn render_bilevel(image: &BitImage) -> Vec<u8> {
    let mut out = Vec::with_capacity(image.pixels().len() * 4);
    for &pixel in image.pixels() {
        let v = if pixel.is_ink() { 0x00 } else { 0xFF };
        out.extend_from_slice(&[v, v, v, 0xFF]);
    }
    out
}

/// Render a labeling as RGBA, one palette color per region id.
///
/// Region 0 (the background) is always rendered white.
pub fn render_regions(labeling: &Labeling) -> Vec<u8> {
    let w = labeling.width();
    let h = labeling.height();
    let mut out = Vec::with_capacity((w as usize) * (h as usize) * 4);
    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = region_color(labeling.region_id_at(x, y));
            out.extend_from_slice(&[r, g, b, 0xFF]);
        }
    }
    out
}
