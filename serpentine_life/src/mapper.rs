// mapper.rs - Logical (x, y) to physical strip slot mapping
//
// Panels are wired as one strip snaking across the board:
//
//   0   1   2   3   4   5     y = 0  left to right
//  11  10   9   8   7   6     y = 1  right to left
//  12  13  14  15  16  17     y = 2
//  18  19  20  21  22  23     y = 3

use crate::grid::GridSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerpentineMapper {
    grid: GridSize,
}

impl SerpentineMapper {
    pub fn new(grid: GridSize) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Strip slot for cell (x, y). Panics when the cell is off the grid.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.grid.contains(x, y),
            "cell ({x}, {y}) is outside the {}x{} grid",
            self.grid.width(),
            self.grid.height()
        );
        let row_base = (y + y % 2) * self.grid.width();
        if y % 2 == 0 {
            row_base + x
        } else {
            row_base - (x + 1)
        }
    }
}
