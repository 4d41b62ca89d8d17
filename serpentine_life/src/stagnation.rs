// stagnation.rs - Decide when the automaton has gone stale

use log::info;

use crate::engine::LifeEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StagnationReason {
    /// Nothing is alive.
    Extinct,
    /// Still life or period-2 oscillator.
    Cycle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Reseed(StagnationReason),
}

/// Population history over the last three evaluations.
///
/// Only period 1 and period 2 repeats are caught; longer oscillators run on.
#[derive(Clone, Debug, Default)]
pub struct StagnationDetector {
    populations: [usize; 3],
    recorded: usize,
    iterations: u64,
}

impl StagnationDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the engine's population and judge whether to reseed.
    pub fn evaluate(&mut self, engine: &LifeEngine) -> Verdict {
        let population = engine.population();
        self.populations.rotate_left(1);
        self.populations[2] = population;
        self.recorded = (self.recorded + 1).min(3);
        self.iterations += 1;

        if population == 0 {
            info!("population died out after {} iterations", self.iterations);
            return Verdict::Reseed(StagnationReason::Extinct);
        }

        let steady = self.recorded == 3
            && self.populations[0] == population
            && self.populations[1] == population;
        if steady && engine.matches_two_ago() {
            info!(
                "stuck at population {population} after {} iterations",
                self.iterations
            );
            return Verdict::Reseed(StagnationReason::Cycle);
        }

        Verdict::Continue
    }

    /// Forget the history; call after every reseed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Evaluations since the last reset.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSize;
    use crate::patterns::{SeedPattern, find_pattern, glider};

    fn engine_with(rows: &[&str], size: usize) -> LifeEngine {
        let mut engine = LifeEngine::new(GridSize::new(size, size).unwrap());
        engine.seed(&SeedPattern::from_rows(rows));
        engine
    }

    #[test]
    fn empty_grid_triggers_reseed() {
        let mut engine = LifeEngine::new(GridSize::new(5, 5).unwrap());
        engine.step();
        assert_eq!(engine.population(), 0);
        let mut detector = StagnationDetector::new();
        assert_eq!(
            detector.evaluate(&engine),
            Verdict::Reseed(StagnationReason::Extinct)
        );
    }

    #[test]
    fn blinker_is_caught_after_two_steps() {
        let mut engine = engine_with(&["", "", ".###"], 5);
        let mut detector = StagnationDetector::new();
        assert_eq!(detector.evaluate(&engine), Verdict::Continue);
        engine.step();
        assert_eq!(detector.evaluate(&engine), Verdict::Continue);
        engine.step();
        assert!(engine.matches_two_ago());
        assert_eq!(
            detector.evaluate(&engine),
            Verdict::Reseed(StagnationReason::Cycle)
        );
        assert_eq!(detector.iterations(), 3);
    }

    #[test]
    fn still_life_is_caught() {
        let seed = find_pattern("block").unwrap().to_seed((1, 1));
        let mut engine = LifeEngine::new(GridSize::new(6, 6).unwrap());
        engine.seed(&seed);
        let mut detector = StagnationDetector::new();
        let mut verdicts = Vec::new();
        for _ in 0..3 {
            verdicts.push(detector.evaluate(&engine));
            engine.step();
        }
        assert_eq!(
            verdicts,
            vec![
                Verdict::Continue,
                Verdict::Continue,
                Verdict::Reseed(StagnationReason::Cycle)
            ]
        );
    }

    #[test]
    fn moving_glider_is_left_alone() {
        let mut engine = LifeEngine::new(GridSize::new(8, 8).unwrap());
        engine.seed(&glider());
        let mut detector = StagnationDetector::new();
        for _ in 0..32 {
            assert_eq!(detector.evaluate(&engine), Verdict::Continue);
            engine.step();
        }
    }

    #[test]
    fn reset_forgets_history() {
        let mut engine = engine_with(&["", "", ".###"], 5);
        let mut detector = StagnationDetector::new();
        detector.evaluate(&engine);
        engine.step();
        detector.evaluate(&engine);
        engine.step();
        detector.reset();
        assert_eq!(detector.iterations(), 0);
        assert_eq!(detector.evaluate(&engine), Verdict::Continue);
    }
}
