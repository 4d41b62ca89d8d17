// args.rs - Command-line options shared by the panel binaries

use std::time::Duration;

use clap::Args;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::color::{Palette, Rgb};
use crate::config::LifeConfig;
use crate::error::{Error, Result};
use crate::grid::GridSize;
use crate::patterns::find_pattern;

#[derive(Args, Clone, Debug)]
pub struct PanelArgs {
    /// Pixels per row
    #[arg(long, default_value_t = GridSize::DEFAULT_EDGE)]
    pub width: usize,

    /// Number of rows
    #[arg(long, default_value_t = GridSize::DEFAULT_EDGE)]
    pub height: usize,

    /// Delay between generations in milliseconds
    #[arg(long, default_value_t = 30)]
    pub delay_ms: u64,

    /// Named starting pattern, centred on the panel; random when omitted
    #[arg(long)]
    pub pattern: Option<String>,

    /// Seed for the random source, for reproducible runs
    #[arg(long)]
    pub rng_seed: Option<u64>,

    #[arg(long)]
    pub dead: Option<Rgb>,
    #[arg(long)]
    pub alive: Option<Rgb>,
    #[arg(long)]
    pub dying: Option<Rgb>,
    #[arg(long)]
    pub born: Option<Rgb>,
    #[arg(long)]
    pub forecast: Option<Rgb>,
}

impl PanelArgs {
    pub fn to_config(&self) -> Result<LifeConfig> {
        let defaults = Palette::default();
        let palette = Palette {
            dead: self.dead.unwrap_or(defaults.dead),
            alive: self.alive.unwrap_or(defaults.alive),
            dying: self.dying.unwrap_or(defaults.dying),
            born: self.born.unwrap_or(defaults.born),
            forecast: self.forecast.unwrap_or(defaults.forecast),
        };
        let mut config = LifeConfig::new(self.width, self.height)?
            .with_palette(palette)
            .with_step_delay(Duration::from_millis(self.delay_ms));

        if let Some(name) = &self.pattern {
            let pattern = find_pattern(name).ok_or_else(|| Error::UnknownPattern(name.clone()))?;
            let span_x = pattern.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
            let span_y = pattern.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
            let offset = (
                self.width.saturating_sub(span_x) / 2,
                self.height.saturating_sub(span_y) / 2,
            );
            config = config.with_seed(pattern.to_seed(offset));
        }
        Ok(config)
    }

    pub fn rng(&self) -> SmallRng {
        match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        panel: PanelArgs,
    }

    fn parse(args: &[&str]) -> PanelArgs {
        Cli::parse_from(std::iter::once("test").chain(args.iter().copied())).panel
    }

    #[test]
    fn defaults_give_the_default_config() {
        let config = parse(&[]).to_config().unwrap();
        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn colors_and_pattern_are_applied() {
        let config = parse(&[
            "--width", "8", "--height", "6", "--alive", "#ffffff", "--pattern", "blinker",
        ])
        .to_config()
        .unwrap();
        assert_eq!(config.palette.alive, Rgb::new(255, 255, 255));
        let seed = config.seed.unwrap();
        // Blinker is 3x1, centred at (2, 2) on an 8x6 panel.
        assert_eq!(seed.get(2, 2), Some(true));
        assert_eq!(seed.get(4, 2), Some(true));
        assert_eq!(seed.get(1, 2), Some(false));
    }

    #[test]
    fn unknown_pattern_is_an_error() {
        let err = parse(&["--pattern", "nope"]).to_config().unwrap_err();
        assert!(matches!(err, Error::UnknownPattern(name) if name == "nope"));
    }

    #[test]
    fn bad_color_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["test", "--dead", "purple"]);
        assert!(result.is_err());
    }
}
