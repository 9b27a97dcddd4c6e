//! RNG module - injectable random source for piece spawning
//!
//! The engine never touches a global RNG. Every game owns a [`Randomizer`],
//! so tests can replay a fixed sequence and a seeded game is reproducible.
//!
//! Each spawn draws twice, in order: a shape index, then a color index.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::types::{Color, ShapeKind};

/// Uniform index source used when spawning pieces
pub trait Randomizer {
    /// Draw an index in `0..len`. `len == 0` yields 0.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

impl<R: Randomizer + ?Sized> Randomizer for Box<R> {
    fn next_index(&mut self, len: usize) -> usize {
        (**self).next_index(len)
    }
}

/// Seeded xoshiro256++ generator. Same seed, same game.
#[derive(Debug, Clone)]
pub struct SeededRandomizer {
    rng: Xoshiro256PlusPlus,
    seed: u64,
}

impl SeededRandomizer {
    /// Create a new randomizer with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread-local entropy source
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this randomizer was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Randomizer for SeededRandomizer {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

impl Default for SeededRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each value is reduced modulo the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandomizer {
    values: Vec<usize>,
    pos: usize,
}

impl ScriptedRandomizer {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// Script a spawn sequence by shape and color.
    ///
    /// Indices follow catalog order (`ShapeKind::ALL`, `Color::ALL`).
    pub fn from_pieces(pieces: &[(ShapeKind, Color)]) -> Self {
        let values = pieces
            .iter()
            .flat_map(|&(kind, color)| [shape_index(kind), color_index(color)])
            .collect::<Vec<_>>();
        Self::new(values)
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl Randomizer for ScriptedRandomizer {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value % len
    }
}

fn shape_index(kind: ShapeKind) -> usize {
    ShapeKind::ALL
        .iter()
        .position(|&k| k == kind)
        .unwrap_or_default()
}

fn color_index(color: Color) -> usize {
    Color::ALL
        .iter()
        .position(|&c| c == color)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_deterministic() {
        let mut rng1 = SeededRandomizer::new(12345);
        let mut rng2 = SeededRandomizer::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_index(7), rng2.next_index(7));
        }
    }

    #[test]
    fn test_seeded_stays_in_range() {
        let mut rng = SeededRandomizer::new(7);
        for _ in 0..1000 {
            assert!(rng.next_index(8) < 8);
        }
        assert_eq!(rng.next_index(0), 0);
    }

    #[test]
    fn test_seeded_covers_every_index() {
        let mut rng = SeededRandomizer::new(99);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.next_index(7)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_cycles_and_wraps() {
        let mut rng = ScriptedRandomizer::new(vec![1, 9]);
        assert_eq!(rng.next_index(7), 1);
        assert_eq!(rng.next_index(7), 2);
        assert_eq!(rng.next_index(7), 1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_scripted_from_pieces_orders_shape_then_color() {
        let mut rng = ScriptedRandomizer::from_pieces(&[
            (ShapeKind::Z, Color::Orange),
            (ShapeKind::I, Color::White),
        ]);
        assert_eq!(rng.next_index(7), 6);
        assert_eq!(rng.next_index(8), 7);
        assert_eq!(rng.next_index(7), 0);
        assert_eq!(rng.next_index(8), 0);
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let mut rng = ScriptedRandomizer::default();
        assert_eq!(rng.next_index(7), 0);
    }
}
