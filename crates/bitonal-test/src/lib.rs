//! bitonal-test - Regression test harness
//!
//! Tracks a sequence of indexed comparisons within one regression test and
//! reports every failure at once instead of stopping at the first, so a
//! failing run shows the full damage.
//!
//! # Usage
//!
//! ```
//! use bitonal_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 4.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;

use bitonal_core::{BitImage, Pixel};

/// Build an image from a 0/1 grid, `1` meaning ink.
///
/// Convenience for spelling out literal test grids.
///
/// # Panics
///
/// Panics if the grid is empty or ragged; test fixtures are static.
pub fn image_from_bits(grid: &[&[u8]]) -> BitImage {
    let rows: Vec<Vec<Pixel>> = grid
        .iter()
        .map(|row| {
            row.iter()
                .map(|&v| if v != 0 { Pixel::Ink } else { Pixel::Whitespace })
                .collect()
        })
        .collect();
    BitImage::from_rows(&rows).unwrap()
}
