//! RNG module - uniform random piece generation
//!
//! Each draw picks one kind from the configured catalog with equal probability.
//! The generator is seeded, so a seed fully determines the piece sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ConfigError;
use crate::types::PieceKind;

/// Uniform piece generator over a fixed catalog
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: StdRng,
    catalog: Vec<PieceKind>,
    seed: u64,
}

impl PieceGenerator {
    /// Create a generator. An empty catalog is rejected.
    pub fn new(seed: u64, catalog: &[PieceKind]) -> Result<Self, ConfigError> {
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            catalog: catalog.to_vec(),
            seed,
        })
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.gen_range(0..self.catalog.len());
        self.catalog[idx]
    }

    /// Restart the sequence from `seed`, keeping the catalog.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn catalog(&self) -> &[PieceKind] {
        &self.catalog
    }
}
