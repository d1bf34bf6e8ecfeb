//! Single-pass connected region labeling
//!
//! A raster-order scan assigns every pixel a provisional equivalence class,
//! merging classes through a disjoint-set forest as connections are
//! discovered, then normalizes classes to dense region ids.
//!
//! The connectivity rule is value-based and deliberately non-standard:
//! whitespace pixels are labeled through the same propagation as ink, the
//! above-row window covers offsets {-1, 0} plus {+1} everywhere but the
//! last column, and each step additionally unions the labels of (x-1, y)
//! and (x, y-1) when those two pixels share a value. Substituting textbook
//! 4- or 8-connectivity changes region boundaries; don't.

use crate::equiv::EquivTable;
use crate::region::Region;
use bitonal_core::{BitImage, Point};
use std::collections::HashMap;

/// The result of one labeling run
///
/// Owns the final label grid and the non-background regions. Each run
/// produces a fresh `Labeling`; the grid and regions are exclusively owned
/// by it and are mutated in place only by [`Labeling::minimize_regions`].
#[derive(Debug, Clone)]
pub struct Labeling {
    width: u32,
    height: u32,
    /// Row-major grid of final region ids
    labels: Vec<u32>,
    /// Regions excluding the background; ids start at 1
    regions: Vec<Region>,
}

/// Region id reserved for the background.
pub const BACKGROUND_ID: u32 = 0;

/// Label the connected regions of an image.
///
/// Every pixel - ink and whitespace alike - receives a region id in the
/// returned [`Labeling`]; the region list excludes the background.
///
/// The background is taken to be the region whose equivalence class seeded
/// pixel (0, 0). This is a known limitation: for an image with ink at the
/// origin the ink component at (0, 0) is treated as background and the
/// surrounding whitespace is returned as a region. Dependent behavior
/// relies on the assumption, so it is kept as-is rather than fixed.
pub fn label_regions(image: &BitImage) -> Labeling {
    let w = image.width() as usize;
    let h = image.height() as usize;
    let px = |x: usize, y: usize| image.pixel(x as u32, y as u32);

    let mut table = EquivTable::new();
    let mut classes = vec![0usize; w * h];

    // Seed (0, 0) with a fresh class regardless of its value.
    classes[0] = table.alloc();

    // First row: left-neighbor propagation on value equality.
    for x in 1..w {
        classes[x] = if px(x, 0) == px(x - 1, 0) {
            classes[x - 1]
        } else {
            table.alloc()
        };
    }

    for y in 1..h {
        let row = y * w;
        let above = row - w;

        // Column 0 only sees the pixel directly above.
        classes[row] = if px(0, y) == px(0, y - 1) {
            classes[above]
        } else {
            table.alloc()
        };

        for x in 1..w {
            let value = px(x, y);

            let mut current = None;
            if value == px(x - 1, y) {
                current = Some(classes[row + x - 1]);
            }

            // Above-row window: {-1, 0}, plus {+1} unless x is the last
            // column. Every matching neighbor unions with the provisional
            // class; the first match seeds it when the left neighbor didn't.
            let d_max: i64 = if x == w - 1 { 0 } else { 1 };
            for d in -1..=d_max {
                let nx = (x as i64 + d) as usize;
                if value == px(nx, y - 1) {
                    let neighbor = classes[above + nx];
                    match current {
                        Some(class) => table.union(class, neighbor),
                        None => current = Some(neighbor),
                    }
                }
            }

            classes[row + x] = match current {
                Some(class) => class,
                None => table.alloc(),
            };

            // Close the merge path between the left and upper neighbors;
            // without this, diagonal runs can stay in separate classes.
            if px(x - 1, y) == px(x, y - 1) {
                table.union(classes[row + x - 1], classes[above + x]);
            }
        }
    }

    // Normalization: map path-compressed roots to consecutive region ids in
    // first-discovery order, rewrite the grid, and collect coordinates.
    // (0, 0) is visited first, so the background class always maps to id 0.
    let mut ids: HashMap<usize, u32> = HashMap::new();
    let mut regions: Vec<Region> = Vec::new();
    let mut labels = vec![0u32; w * h];
    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let root = table.find(classes[idx]);
            let next = regions.len() as u32;
            let id = *ids.entry(root).or_insert_with(|| {
                regions.push(Region::new(next));
                next
            });
            labels[idx] = id;
            regions[id as usize].push(Point::new(x as i32, y as i32));
        }
    }

    // Drop the background from the returned list; it stays in the grid.
    regions.remove(BACKGROUND_ID as usize);

    Labeling {
        width: w as u32,
        height: h as u32,
        labels,
        regions,
    }
}

impl Labeling {
    /// Get the labeled grid width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the labeled grid height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the non-background regions.
    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Get the final region id at a pixel.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn region_id_at(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width && y < self.height);
        self.labels[(y * self.width + x) as usize]
    }

    /// Condense the region list to outermost regions.
    ///
    /// For every ordered pair (i, j) with i < j, if region i's bounding
    /// rectangle fully contains region j's, region j's coordinates are
    /// absorbed into region i (in the label grid as well) and j is removed.
    /// Containment is rectangle-in-rectangle, not true shape nesting.
    /// O(n^2) in the region count.
    pub fn minimize_regions(&mut self) {
        let mut i = 0;
        while i < self.regions.len() {
            let mut j = i + 1;
            while j < self.regions.len() {
                let outer = self.regions[i].bounding_rect();
                let inner = self.regions[j].bounding_rect();
                if outer.contains_box(&inner) {
                    let absorbed = self.regions.remove(j);
                    let id = self.regions[i].id();
                    for p in absorbed.coordinates() {
                        self.labels[(p.y as u32 * self.width + p.x as u32) as usize] = id;
                    }
                    self.regions[i].absorb(absorbed);
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
    }
}
