// engine.rs - Toroidal Game of Life over three rotating generations

use log::debug;
use rand::Rng;

use crate::grid::GridSize;
use crate::patterns::SeedPattern;

/// How a cell should be drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    SteadyAlive,
    SteadyDead,
    /// Alive now, dead one step ago.
    Born,
    /// Alive now, dead after the next step.
    Dying,
    /// Dead now, alive after the next step.
    ForecastBirth,
}

impl Classification {
    /// Whether the cell is alive in the displayed generation.
    pub fn is_alive(self) -> bool {
        matches!(self, Self::SteadyAlive | Self::Born | Self::Dying)
    }
}

type Generation = Vec<bool>;

/// Game of Life state.
///
/// Three buffers of the same size are allocated once. `current` indexes the
/// buffer being displayed; the one before it (mod 3) is `previous` and the one
/// after it is `two_ago`, which doubles as the write target for `step`.
pub struct LifeEngine {
    grid: GridSize,
    generations: [Generation; 3],
    current: usize,
    generation: u64,
}

impl LifeEngine {
    pub fn new(grid: GridSize) -> Self {
        let cells = grid.cell_count();
        Self {
            grid,
            generations: [vec![false; cells], vec![false; cells], vec![false; cells]],
            current: 0,
            generation: 0,
        }
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Steps taken since the last seed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn previous_index(&self) -> usize {
        (self.current + 2) % 3
    }

    #[inline]
    fn two_ago_index(&self) -> usize {
        (self.current + 1) % 3
    }

    fn current_cells(&self) -> &Generation {
        &self.generations[self.current]
    }

    /// Overlay `pattern` onto the current generation.
    ///
    /// Cells the pattern does not cover keep their value. Afterwards every
    /// live cell renders as born.
    pub fn seed(&mut self, pattern: &SeedPattern) {
        let grid = self.grid;
        let cells = &mut self.generations[self.current];
        for x in 0..grid.width().min(pattern.width()) {
            for y in 0..grid.height() {
                if let Some(alive) = pattern.get(x, y) {
                    cells[grid.offset(x, y)] = alive;
                }
            }
        }
        self.reset_history();
        debug!(
            "seeded {}x{} pattern, population {}",
            pattern.width(),
            pattern.height(),
            self.population()
        );
    }

    /// Fill the current generation with independent fair coin flips.
    pub fn seed_random<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.generations[self.current].iter_mut() {
            *cell = rng.random::<bool>();
        }
        self.reset_history();
        debug!("seeded randomly, population {}", self.population());
    }

    /// Kill every cell in all three generations.
    pub fn clear(&mut self) {
        for generation in self.generations.iter_mut() {
            generation.fill(false);
        }
        self.generation = 0;
    }

    fn reset_history(&mut self) {
        let previous = self.previous_index();
        let two_ago = self.two_ago_index();
        self.generations[previous].fill(false);
        self.generations[two_ago].fill(false);
        self.generation = 0;
    }

    /// Advance one generation.
    ///
    /// Every next state is computed from the current buffer before any role
    /// changes, so no cell sees an already-updated neighbour.
    pub fn step(&mut self) {
        let target = self.two_ago_index();
        let mut next = std::mem::take(&mut self.generations[target]);
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                next[self.grid.offset(x, y)] = self.next_state(x, y);
            }
        }
        self.generations[target] = next;
        self.current = target;
        self.generation += 1;
    }

    /// Live cells among the eight wrapped neighbours of (x, y).
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        let width = self.grid.width() as isize;
        let height = self.grid.height() as isize;
        let cells = self.current_cells();
        let mut count = 0;
        for dy in [-1isize, 0, 1] {
            for dx in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (x as isize + dx).rem_euclid(width) as usize;
                let ny = (y as isize + dy).rem_euclid(height) as usize;
                if cells[self.grid.offset(nx, ny)] {
                    count += 1;
                }
            }
        }
        count
    }

    /// State of (x, y) after the next step, without stepping.
    pub fn next_state(&self, x: usize, y: usize) -> bool {
        match (self.is_alive(x, y), self.neighbor_count(x, y)) {
            (true, 2) | (true, 3) => true,   // Survival
            (false, 3)            => true,   // Birth
            _                     => false,  // Death or stays dead
        }
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        assert!(self.grid.contains(x, y), "cell ({x}, {y}) is off the grid");
        self.current_cells()[self.grid.offset(x, y)]
    }

    pub fn was_alive(&self, x: usize, y: usize) -> bool {
        assert!(self.grid.contains(x, y), "cell ({x}, {y}) is off the grid");
        self.generations[self.previous_index()][self.grid.offset(x, y)]
    }

    pub fn classify(&self, x: usize, y: usize) -> Classification {
        let alive = self.is_alive(x, y);
        if alive && !self.was_alive(x, y) {
            Classification::Born
        } else if alive && !self.next_state(x, y) {
            Classification::Dying
        } else if alive {
            Classification::SteadyAlive
        } else if self.next_state(x, y) {
            Classification::ForecastBirth
        } else {
            Classification::SteadyDead
        }
    }

    pub fn population(&self) -> usize {
        self.current_cells().iter().filter(|&&alive| alive).count()
    }

    /// True when the current generation is identical to the one two steps back.
    pub fn matches_two_ago(&self) -> bool {
        self.generations[self.current] == self.generations[self.two_ago_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{SeedPattern, glider};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn engine(width: usize, height: usize) -> LifeEngine {
        LifeEngine::new(GridSize::new(width, height).unwrap())
    }

    fn live_cells(engine: &LifeEngine) -> Vec<(usize, usize)> {
        let grid = engine.grid();
        let mut cells = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if engine.is_alive(x, y) {
                    cells.push((x, y));
                }
            }
        }
        cells.sort();
        cells
    }

    #[test]
    fn isolated_cell_dies() {
        let mut life = engine(5, 5);
        life.seed(&SeedPattern::from_rows(&["", "", "..#"]));
        assert_eq!(life.population(), 1);
        life.step();
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn block_is_still() {
        let mut life = engine(4, 4);
        life.seed(&SeedPattern::from_rows(&[".##", ".##"]));
        let start = live_cells(&life);
        for _ in 0..6 {
            life.step();
            assert_eq!(live_cells(&life), start);
        }
    }

    #[test]
    fn neighbours_wrap_around_edges() {
        let mut life = engine(4, 3);
        life.seed(&SeedPattern::from_rows(&["#..#", "....", "#..."]));
        // (0, 0) sees (3, 0), (0, 2) and (3, 2) through the wrap.
        assert_eq!(life.neighbor_count(0, 0), 2);
        assert_eq!(life.neighbor_count(3, 2), 3);
        assert_eq!(life.neighbor_count(1, 1), 2);
    }

    #[test]
    fn narrow_grids_count_wrapped_neighbours_repeatedly() {
        // On a 1-wide torus the left and right neighbours are the cell itself.
        let mut life = engine(1, 3);
        life.seed(&SeedPattern::from_bits(&[[1u8, 0, 0]]));
        assert_eq!(life.neighbor_count(0, 1), 3);
        assert!(life.next_state(0, 1));
    }

    #[test]
    fn glider_moves_one_cell_diagonally_every_four_steps() {
        let mut life = engine(5, 5);
        life.seed(&glider());
        let start = live_cells(&life);
        for _ in 0..4 {
            life.step();
        }
        let mut expected: Vec<(usize, usize)> = start
            .iter()
            .map(|&(x, y)| ((x + 4) % 5, (y + 4) % 5))
            .collect();
        expected.sort();
        assert_eq!(live_cells(&life), expected);
        assert_eq!(life.generation(), 4);
    }

    #[test]
    fn random_seed_is_roughly_half_alive() {
        let mut life = engine(32, 32);
        life.seed_random(&mut SmallRng::seed_from_u64(11));
        let population = life.population();
        assert!((400..624).contains(&population), "population {population}");
        assert_eq!(life.generation(), 0);
        assert!(!life.was_alive(0, 0));

        let mut other = engine(32, 32);
        other.seed_random(&mut SmallRng::seed_from_u64(12));
        assert_ne!(life.generations[life.current], other.generations[other.current]);
    }

    #[test]
    fn pattern_leaves_uncovered_cells_alone() {
        let mut life = engine(4, 4);
        life.seed(&SeedPattern::from_rows(&["####", "####", "####", "####"]));
        life.seed(&SeedPattern::from_rows(&["..", ".."]));
        assert_eq!(life.population(), 12);
        assert!(!life.is_alive(1, 1));
        assert!(life.is_alive(2, 1));
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut life = engine(3, 3);
        life.seed(&SeedPattern::from_rows(&["#####", ".....", ".....", "....#"]));
        assert_eq!(live_cells(&life), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn seeding_twice_gives_identical_state() {
        let mut once = engine(6, 6);
        once.seed(&glider());
        let mut twice = engine(6, 6);
        twice.seed(&glider());
        twice.seed(&glider());
        assert_eq!(live_cells(&once), live_cells(&twice));
        assert_eq!(once.generations[once.current], twice.generations[twice.current]);
    }

    #[test]
    fn seeded_cells_render_as_born() {
        let mut life = engine(5, 5);
        life.seed(&SeedPattern::from_rows(&["", ".###"]));
        assert_eq!(life.classify(1, 1), Classification::Born);
        assert_eq!(life.classify(2, 1), Classification::Born);
        assert_eq!(life.classify(0, 0), Classification::SteadyDead);
    }

    #[test]
    fn blinker_classifies_every_transition() {
        let mut life = engine(5, 5);
        life.seed(&SeedPattern::from_rows(&["", "", ".###"]));
        life.step();
        // Vertical phase: the centre survived, the ends are new and the old
        // ends are about to come back.
        assert_eq!(life.classify(2, 2), Classification::SteadyAlive);
        assert_eq!(life.classify(2, 1), Classification::Born);
        assert_eq!(life.classify(2, 3), Classification::Born);
        assert_eq!(life.classify(1, 2), Classification::ForecastBirth);
        assert_eq!(life.classify(3, 2), Classification::ForecastBirth);
        assert_eq!(life.classify(0, 0), Classification::SteadyDead);
        life.step();
        assert_eq!(life.classify(1, 2), Classification::Born);
        assert_eq!(life.classify(2, 1), Classification::ForecastBirth);
        assert_eq!(life.classify(2, 4), Classification::SteadyDead);
    }

    #[test]
    fn dying_cells_are_flagged_before_they_die() {
        let mut life = engine(6, 6);
        life.seed(&SeedPattern::from_rows(&["", "", ".####"]));
        life.step();
        // The two survivors of the row are now crowded by four newborns.
        assert_eq!(life.population(), 6);
        assert_eq!(life.classify(2, 2), Classification::Dying);
        assert_eq!(life.classify(3, 2), Classification::Dying);
        assert_eq!(life.classify(2, 1), Classification::Born);
        life.step();
        assert!(!life.is_alive(2, 2));
    }

    #[test]
    fn step_rotates_buffers_without_reallocating() {
        let mut life = engine(4, 4);
        let pointers: Vec<*const bool> = life.generations.iter().map(|g| g.as_ptr()).collect();
        life.seed(&glider());
        for _ in 0..5 {
            life.step();
        }
        for generation in &life.generations {
            assert!(pointers.contains(&generation.as_ptr()));
        }
    }

    #[test]
    fn two_cycle_matches_two_ago() {
        let mut life = engine(5, 5);
        life.seed(&SeedPattern::from_rows(&["", "", ".###"]));
        life.step();
        assert!(!life.matches_two_ago());
        life.step();
        assert!(life.matches_two_ago());
    }

    #[test]
    fn clear_kills_everything() {
        let mut life = engine(4, 4);
        life.seed(&glider());
        life.step();
        life.clear();
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 0);
        assert!(life.matches_two_ago());
    }
}
