// grid.rs - Grid dimensions for the pixel panel

use crate::error::{Error, Result};

/// Width and height of the panel, fixed for the lifetime of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: usize,
    height: usize,
}

impl GridSize {
    /// Default panel edge, matching the 16x16 boards the strip layout was built for.
    pub const DEFAULT_EDGE: usize = 16;

    pub fn new(width: usize, height: usize) -> Result<Self> {
        // The cell count must fit a strip index.
        match width.checked_mul(height) {
            Some(cells) if cells > 0 => Ok(Self { width, height }),
            _ => Err(Error::InvalidDimensions { width, height }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, which is also the number of pixels on the strip.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Row-major offset used by in-memory cell buffers (not the strip order).
    #[inline]
    pub(crate) fn offset(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_EDGE,
            height: Self::DEFAULT_EDGE,
        }
    }
}
