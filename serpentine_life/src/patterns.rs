// patterns.rs - Seed patterns and a small library of named shapes

/// Dense seed overlay addressed as `cells[x][y]`.
///
/// Columns may have different lengths; any cell the pattern does not cover
/// is left alone when seeding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedPattern {
    columns: Vec<Vec<bool>>,
}

impl SeedPattern {
    pub fn from_columns(columns: Vec<Vec<bool>>) -> Self {
        Self { columns }
    }

    /// Build from `[x][y]` bit rows; any non-zero value is alive.
    pub fn from_bits<C: AsRef<[u8]>>(columns: &[C]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|column| column.as_ref().iter().map(|&bit| bit != 0).collect())
                .collect(),
        }
    }

    /// Build from picture rows, top row first: `#` is alive, anything else dead.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut columns = vec![vec![false; rows.len()]; width];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                columns[x][y] = ch == '#';
            }
        }
        Self { columns }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Length of the longest column.
    pub fn height(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// `None` when (x, y) lies outside the pattern.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.columns.get(x)?.get(y).copied()
    }
}

/// The classic glider, `[x][y]`.
pub const GLIDER: [[u8; 3]; 3] = [
    [1, 1, 1],
    [1, 0, 0],
    [0, 1, 0],
];

pub fn glider() -> SeedPattern {
    SeedPattern::from_bits(&GLIDER)
}

/// A named shape stored as the (x, y) coordinates of its live cells.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Dense overlay covering the shape's bounding box shifted by `offset`.
    ///
    /// Cells between the origin and the offset come out dead, so applying the
    /// result also clears that margin.
    pub fn to_seed(&self, offset: (usize, usize)) -> SeedPattern {
        let width = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0) + offset.0;
        let height = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0) + offset.1;
        let mut columns = vec![vec![false; height]; width];
        for &(x, y) in self.cells {
            columns[x + offset.0][y + offset.1] = true;
        }
        SeedPattern::from_columns(columns)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Case-insensitive lookup in [`PATTERNS`].
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}
