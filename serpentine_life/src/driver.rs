// driver.rs - Ties engine, surface and stagnation detector into a loop

use std::future::Future;
use std::time::Duration;

use log::{debug, info, warn};
use rand::Rng;

use crate::color::Palette;
use crate::config::LifeConfig;
use crate::device::OutputDevice;
use crate::engine::LifeEngine;
use crate::error::Result;
use crate::patterns::SeedPattern;
use crate::stagnation::{StagnationDetector, StagnationReason, Verdict};
use crate::surface::PixelSurface;

/// What one tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Stepped { generation: u64, population: usize },
    Reseeded(StagnationReason),
}

pub struct Driver<D: OutputDevice, R: Rng> {
    engine: LifeEngine,
    surface: PixelSurface<D>,
    detector: StagnationDetector,
    palette: Palette,
    rng: R,
    generation: u64,
    reseeds: u64,
}

impl<D: OutputDevice, R: Rng> Driver<D, R> {
    /// Blank the panel, seed from the config (or randomly) and show the first frame.
    pub fn new(config: &LifeConfig, device: D, mut rng: R) -> Result<Self> {
        let mut surface = PixelSurface::new(config.grid, device)?;
        surface.wipe(true)?;
        let mut engine = LifeEngine::new(config.grid);
        match &config.seed {
            Some(pattern) => engine.seed(pattern),
            None => engine.seed_random(&mut rng),
        }
        info!(
            "panel {}x{}, initial population {}",
            config.grid.width(),
            config.grid.height(),
            engine.population()
        );

        let mut driver = Self {
            engine,
            surface,
            detector: StagnationDetector::new(),
            palette: config.palette,
            rng,
            generation: 0,
            reseeds: 0,
        };
        driver.render()?;
        Ok(driver)
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn surface(&self) -> &PixelSurface<D> {
        &self.surface
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Steps taken over the driver's lifetime, across reseeds.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reseeds(&self) -> u64 {
        self.reseeds
    }

    /// One loop iteration: judge, reseed or step, render, commit.
    pub fn tick(&mut self) -> Result<Tick> {
        let tick = match self.detector.evaluate(&self.engine) {
            Verdict::Reseed(reason) => {
                info!("reseeding ({reason:?}) at generation {}", self.generation);
                self.engine.seed_random(&mut self.rng);
                self.detector.reset();
                self.reseeds += 1;
                Tick::Reseeded(reason)
            }
            Verdict::Continue => {
                self.engine.step();
                self.generation += 1;
                Tick::Stepped {
                    generation: self.generation,
                    population: self.engine.population(),
                }
            }
        };
        debug!("{tick:?}");
        self.render()?;
        Ok(tick)
    }

    /// Start over from `pattern` on an empty grid, or randomly with `None`.
    pub fn reseed(&mut self, pattern: Option<&SeedPattern>) -> Result<()> {
        match pattern {
            Some(pattern) => {
                self.engine.clear();
                self.engine.seed(pattern);
            }
            None => self.engine.seed_random(&mut self.rng),
        }
        self.detector.reset();
        self.reseeds += 1;
        self.render()
    }

    /// Paint every cell's classification and push the frame out.
    fn render(&mut self) -> Result<()> {
        let grid = self.engine.grid();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let color = self.palette.color_for(self.engine.classify(x, y));
                self.surface.set(x, y, color);
            }
        }
        self.surface.commit().inspect_err(|err| warn!("commit failed: {err}"))
    }

    /// Tick forever with `delay` between frames until `shutdown` resolves.
    ///
    /// Shutdown is only noticed while sleeping, never mid-tick.
    pub async fn run<F>(&mut self, delay: Duration, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            self.tick()?;
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutting down after {} generations", self.generation);
                    return Ok(());
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}
