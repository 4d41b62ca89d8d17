//! Conway's Game of Life for serpentine-wired RGB pixel panels.
//!
//! The panel is a single addressable strip snaking across the board.
//! [`LifeEngine`] runs the automaton on a torus and classifies each cell as
//! steady, born, dying or about to be born; [`PixelSurface`] turns grid
//! coordinates into strip slots; [`StagnationDetector`] asks for a reseed
//! when the board dies out or falls into a period-1 or period-2 repeat;
//! [`Driver`] ties them into a tick loop.

pub mod args;
pub mod color;
pub mod config;
pub mod device;
pub mod driver;
pub mod engine;
mod error;
pub mod grid;
pub mod mapper;
pub mod patterns;
pub mod stagnation;
pub mod surface;

pub use crate::args::PanelArgs;
pub use crate::color::{Palette, Rgb};
pub use crate::config::LifeConfig;
pub use crate::device::{AnsiStrip, MemoryStrip, OutputDevice};
pub use crate::driver::{Driver, Tick};
pub use crate::engine::{Classification, LifeEngine};
pub use crate::error::{DeviceError, Error, Result};
pub use crate::grid::GridSize;
pub use crate::mapper::SerpentineMapper;
pub use crate::patterns::{PATTERNS, Pattern, SeedPattern};
pub use crate::stagnation::{StagnationDetector, StagnationReason, Verdict};
pub use crate::surface::PixelSurface;
