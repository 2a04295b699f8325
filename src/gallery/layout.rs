//! Gallery grid geometry, the re-render pass and contact sheet composition

use crate::geometry::params::TreeParameters;
use crate::io::configuration::{BACKGROUND_COLOR, CELL_GAP, CELL_HEIGHT, CELL_WIDTH, GRID_SIZE};
use crate::render::renderer::render_tree;
use crate::render::surface::{RasterSurface, Surface};
use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

/// Square grid of equally sized cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Rows and columns
    pub grid_size: usize,
    /// Cell width in pixels
    pub cell_width: u32,
    /// Cell height in pixels
    pub cell_height: u32,
    /// Spacing between neighbouring cells on the sheet
    pub gap: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            gap: CELL_GAP,
        }
    }
}

impl GridLayout {
    /// Number of cells, which is also the gallery capacity
    pub const fn total_cells(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Top-left pixel of cell `index` on the sheet, row-major
    pub fn cell_origin(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.total_cells() {
            return None;
        }
        let row = (index / self.grid_size) as u32;
        let col = (index % self.grid_size) as u32;
        Some((
            col * (self.cell_width + self.gap),
            row * (self.cell_height + self.gap),
        ))
    }

    /// Width and height of the whole sheet
    pub fn sheet_dimensions(&self) -> (u32, u32) {
        let n = self.grid_size as u32;
        let gaps = n.saturating_sub(1) * self.gap;
        (n * self.cell_width + gaps, n * self.cell_height + gaps)
    }
}

/// One cleared surface per grid slot, in slot order
pub fn allocate_surfaces(layout: &GridLayout) -> Vec<RasterSurface> {
    (0..layout.total_cells())
        .map(|_| RasterSurface::new(layout.cell_width, layout.cell_height))
        .collect()
}

/// Redraw every entry into the surface with the same index
///
/// Entries without a surface are skipped. Returns the number drawn.
pub fn render_gallery<S: Surface>(entries: &[TreeParameters], surfaces: &mut [S]) -> usize {
    render_gallery_with(entries, surfaces, |_| {})
}

/// [`render_gallery`] with a callback after each drawn cell
pub fn render_gallery_with<S, F>(
    entries: &[TreeParameters],
    surfaces: &mut [S],
    mut on_cell: F,
) -> usize
where
    S: Surface,
    F: FnMut(usize),
{
    let mut drawn = 0;
    for (index, params) in entries.iter().enumerate() {
        let Some(surface) = surfaces.get_mut(index) else {
            debug!(index, "no surface for gallery entry, skipping");
            continue;
        };
        render_tree(Some(surface), params);
        drawn += 1;
        on_cell(index);
    }
    drawn
}

/// Place every cell image at its grid position on one sheet
///
/// Surfaces beyond the grid's capacity are ignored.
pub fn compose_sheet(layout: &GridLayout, surfaces: &[RasterSurface]) -> RgbaImage {
    let (width, height) = layout.sheet_dimensions();
    let mut sheet = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

    for (index, surface) in surfaces.iter().enumerate() {
        if let Some((x, y)) = layout.cell_origin(index) {
            imageops::overlay(&mut sheet, surface.image(), i64::from(x), i64::from(y));
        }
    }

    sheet
}
