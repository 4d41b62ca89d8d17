// error.rs - Error types for the life panel

use std::io;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("grid dimensions must be positive and addressable, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("output device has {actual} slots but the grid needs {expected}")]
    DeviceLength { expected: usize, actual: usize },

    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("invalid color `{0}` (expected #rrggbb or r,g,b)")]
    InvalidColor(String),

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),
}

/// Failure while pushing a frame out to the pixel hardware.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("output device write failed: {0}")]
    Io(#[from] io::Error),

    /// For hardware backends that lose the strip outside of an I/O call,
    /// e.g. a driver reporting the data pin released.
    #[error("output device disconnected")]
    Disconnected,
}
