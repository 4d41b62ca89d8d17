// config.rs - Construction-time settings for a panel run

use std::time::Duration;

use crate::color::Palette;
use crate::error::Result;
use crate::grid::GridSize;
use crate::patterns::SeedPattern;

/// Everything fixed at construction. Nothing here changes while a driver runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    pub grid: GridSize,
    pub palette: Palette,
    /// `None` seeds randomly.
    pub seed: Option<SeedPattern>,
    pub step_delay: Duration,
}

impl LifeConfig {
    pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(30);

    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            grid: GridSize::new(width, height)?,
            ..Self::default()
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_seed(mut self, seed: SeedPattern) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            palette: Palette::default(),
            seed: None,
            step_delay: Self::DEFAULT_STEP_DELAY,
        }
    }
}
