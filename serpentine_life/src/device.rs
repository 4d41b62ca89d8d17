// device.rs - Addressable pixel strips the surface can drive

use std::io::Write;

use crate::color::{BLACK, Rgb};
use crate::error::DeviceError;
use crate::grid::GridSize;
use crate::mapper::SerpentineMapper;

/// An ordered, fixed-length run of RGB slots with a push-to-hardware step.
pub trait OutputDevice {
    fn slots(&self) -> &[Rgb];

    fn slots_mut(&mut self) -> &mut [Rgb];

    /// Flush every slot to the hardware. May block for the transfer.
    fn write(&mut self) -> Result<(), DeviceError>;

    fn len(&self) -> usize {
        self.slots().len()
    }

    fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }
}

/// Strip held in memory. `write` latches the buffer into [`MemoryStrip::shown`].
#[derive(Clone, Debug)]
pub struct MemoryStrip {
    slots: Vec<Rgb>,
    shown: Vec<Rgb>,
    writes: usize,
}

impl MemoryStrip {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![BLACK; len],
            shown: vec![BLACK; len],
            writes: 0,
        }
    }

    /// What the hardware displays as of the last write.
    pub fn shown(&self) -> &[Rgb] {
        &self.shown
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl OutputDevice for MemoryStrip {
    fn slots(&self) -> &[Rgb] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [Rgb] {
        &mut self.slots
    }

    fn write(&mut self) -> Result<(), DeviceError> {
        self.shown.copy_from_slice(&self.slots);
        self.writes += 1;
        Ok(())
    }
}

/// Draws the panel on a 24-bit color terminal, two columns per pixel.
///
/// Slots are read back through the serpentine mapping so the picture shows
/// the physical layout of the strip.
pub struct AnsiStrip<W: Write> {
    slots: Vec<Rgb>,
    mapper: SerpentineMapper,
    out: W,
    cleared: bool,
}

impl<W: Write> AnsiStrip<W> {
    pub fn new(grid: GridSize, out: W) -> Self {
        Self {
            slots: vec![BLACK; grid.cell_count()],
            mapper: SerpentineMapper::new(grid),
            out,
            cleared: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputDevice for AnsiStrip<W> {
    fn slots(&self) -> &[Rgb] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [Rgb] {
        &mut self.slots
    }

    fn write(&mut self) -> Result<(), DeviceError> {
        if !self.cleared {
            write!(self.out, "\x1b[2J")?;
            self.cleared = true;
        }
        write!(self.out, "\x1b[H")?;
        let grid = self.mapper.grid();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let Rgb { r, g, b } = self.slots[self.mapper.index(x, y)];
                write!(self.out, "\x1b[48;2;{r};{g};{b}m  ")?;
            }
            writeln!(self.out, "\x1b[0m")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
