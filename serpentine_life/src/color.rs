// color.rs - RGB triples, named strip colors and the render palette

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::engine::Classification;
use crate::error::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(color: Rgb) -> Self {
        (color.r, color.g, color.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Accepts `#rrggbb`, `rrggbb` or `r,g,b`.
impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        if text.contains(',') {
            let channels: Vec<u8> = text
                .split(',')
                .map(|part| part.trim().parse::<u8>())
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?;
            return match channels.as_slice() {
                &[r, g, b] => Ok(Self::new(r, g, b)),
                _ => Err(invalid()),
            };
        }

        let hex = text.strip_prefix('#').unwrap_or(text);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

pub const BLACK: Rgb      = Rgb::new(0, 0, 0);
pub const WHITE: Rgb      = Rgb::new(255, 255, 255);
pub const DIM_WHITE: Rgb  = Rgb::new(16, 16, 16);

pub const RED: Rgb        = Rgb::new(255, 0, 0);
pub const DARK_RED: Rgb   = Rgb::new(64, 0, 0);

pub const GREEN: Rgb      = Rgb::new(0, 255, 0);
pub const DARK_GREEN: Rgb = Rgb::new(0, 64, 0);

pub const BLUE: Rgb       = Rgb::new(0, 0, 255);
pub const DARK_BLUE: Rgb  = Rgb::new(0, 0, 64);

/// The five render colors, one per cell classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub dead: Rgb,
    pub alive: Rgb,
    pub dying: Rgb,
    pub born: Rgb,
    pub forecast: Rgb,
}

impl Palette {
    pub fn color_for(&self, class: Classification) -> Rgb {
        match class {
            Classification::SteadyDead    => self.dead,
            Classification::SteadyAlive   => self.alive,
            Classification::Dying         => self.dying,
            Classification::Born          => self.born,
            Classification::ForecastBirth => self.forecast,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dead: BLACK,
            alive: DIM_WHITE,
            dying: DARK_RED,
            born: DARK_GREEN,
            forecast: DARK_BLUE,
        }
    }
}
