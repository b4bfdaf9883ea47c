//! RNG module - uniform random piece selection
//!
//! Every kind is equally likely on every draw (no bag). The generator is
//! seeded explicitly so a seed replays the same sequence of pieces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Seeded source of piece kinds
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    seed: u64,
    rng: StdRng,
}

impl PieceRandomizer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next kind uniformly from all seven
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}
