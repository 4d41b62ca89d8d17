// surface.rs - Grid-addressed view over an output device

use crate::color::{BLACK, Rgb};
use crate::device::OutputDevice;
use crate::error::{Error, Result};
use crate::grid::GridSize;
use crate::mapper::SerpentineMapper;

/// Sole owner of the output device; every write goes through the serpentine mapping.
pub struct PixelSurface<D: OutputDevice> {
    device: D,
    mapper: SerpentineMapper,
}

impl<D: OutputDevice> PixelSurface<D> {
    pub fn new(grid: GridSize, device: D) -> Result<Self> {
        if device.len() != grid.cell_count() {
            return Err(Error::DeviceLength {
                expected: grid.cell_count(),
                actual: device.len(),
            });
        }
        Ok(Self {
            device,
            mapper: SerpentineMapper::new(grid),
        })
    }

    pub fn grid(&self) -> GridSize {
        self.mapper.grid()
    }

    pub fn mapper(&self) -> &SerpentineMapper {
        &self.mapper
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.device.slots()[self.mapper.index(x, y)]
    }

    /// Buffer `color` for (x, y). Nothing reaches the hardware until [`commit`](Self::commit).
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        let slot = self.mapper.index(x, y);
        self.device.slots_mut()[slot] = color;
    }

    /// Paint the half-open rectangle `x0..x1` by `y0..y1`, committing when asked.
    pub fn fill_rect(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        color: Rgb,
        commit: bool,
    ) -> Result<()> {
        for x in x0..x1 {
            for y in y0..y1 {
                self.set(x, y, color);
            }
        }
        if commit {
            self.commit()?;
        }
        Ok(())
    }

    /// Black out the whole panel.
    pub fn wipe(&mut self, commit: bool) -> Result<()> {
        let grid = self.grid();
        self.fill_rect(0, 0, grid.width(), grid.height(), BLACK, commit)
    }

    /// Push the buffered frame to the hardware.
    pub fn commit(&mut self) -> Result<()> {
        self.device.write()?;
        Ok(())
    }
}
