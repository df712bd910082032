//! Lookup table from strategy ids to factories.

use chess_core::Strategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::clock::SystemClock;
use crate::{
    AggressiveStrategy, ChaoticStrategy, DefensiveStrategy, DiagonalStrategy, FirstMoveStrategy,
    FractalStrategy, MathStrategy, MimicStrategy, OcdStrategy, ParanoidStrategy,
    RandomStrategy, ReturnLineStrategy, RevengeLuckStrategy, SpectralStrategy,
    StrategicStrategy, SuicidalKingStrategy, SuperstitionStrategy, WorstfishStrategy,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown strategy '{0}'")]
    StrategyNotFound(String),
    #[error("strategy id '{0}' is already registered")]
    DuplicateId(String),
}

/// Builds a fresh strategy around the random source it is handed.
pub type Factory = Box<dyn Fn(ChaCha8Rng) -> Box<dyn Strategy> + Send + Sync>;

struct Entry {
    id: String,
    name: String,
    factory: Factory,
}

impl Entry {
    fn new<F>(id: impl Into<String>, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(ChaCha8Rng) -> Box<dyn Strategy> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            name: name.into(),
            factory: Box::new(factory),
        }
    }
}

/// Registered strategies in registration order.
///
/// Every call to [`create`](Self::create) returns a brand-new instance, so
/// no private state is ever shared between two matches.
#[derive(Default)]
pub struct StrategyRegistry {
    entries: Vec<Entry>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All strategies shipped with this crate.
    pub fn builtin() -> Self {
        let entries = vec![
            Entry::new("random", "Random Bot", |rng| Box::new(RandomStrategy::new(rng))),
            Entry::new("first", "First Move Bot", |_| Box::new(FirstMoveStrategy::new())),
            Entry::new("aggressive", "Aggressive Bot", |rng| {
                Box::new(AggressiveStrategy::new(rng))
            }),
            Entry::new("defensive", "Defensive Bot", |rng| {
                Box::new(DefensiveStrategy::new(rng))
            }),
            Entry::new("paranoid", "Paranoid Bot", |rng| Box::new(ParanoidStrategy::new(rng))),
            Entry::new("worstfish", "Worstfish Bot", |rng| {
                Box::new(WorstfishStrategy::new(rng))
            }),
            Entry::new("strategic", "Strategic Bot", |rng| {
                Box::new(StrategicStrategy::new(rng))
            }),
            Entry::new("math", "Math Bot", |rng| {
                Box::new(MathStrategy::new(rng, Box::new(SystemClock)))
            }),
            Entry::new("spectral", "Spectral Bot", |rng| Box::new(SpectralStrategy::new(rng))),
            Entry::new("fractal", "Fractal Bot", |rng| Box::new(FractalStrategy::new(rng))),
            Entry::new("return_line", "Return Line Bot", |rng| {
                Box::new(ReturnLineStrategy::new(rng))
            }),
            Entry::new("ocd", "OCD Bot", |rng| Box::new(OcdStrategy::new(rng))),
            Entry::new("revenge_luck", "Revenge Luck Bot", |rng| {
                Box::new(RevengeLuckStrategy::new(rng))
            }),
            Entry::new("diagonal", "Diagonal Bot", |rng| Box::new(DiagonalStrategy::new(rng))),
            Entry::new("mimic", "Mimic Bot", |rng| Box::new(MimicStrategy::new(rng))),
            Entry::new("suicidal_king", "Suicidal King Bot", |rng| {
                Box::new(SuicidalKingStrategy::new(rng))
            }),
            Entry::new("superstition", "Superstition Bot", |rng| {
                Box::new(SuperstitionStrategy::new(rng, Box::new(SystemClock)))
            }),
            Entry::new("chaotic", "Chaotic Bot", |_| {
                Box::new(ChaoticStrategy::new(Box::new(SystemClock)))
            }),
        ];
        Self { entries }
    }

    /// Adds a strategy under `id`. Ids must be unique.
    pub fn register<F>(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(ChaCha8Rng) -> Box<dyn Strategy> + Send + Sync + 'static,
    {
        let id = id.into();
        if self.contains(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        self.entries.push(Entry::new(id, name, factory));
        Ok(())
    }

    fn entry(&self, id: &str) -> Result<&Entry, RegistryError> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| RegistryError::StrategyNotFound(id.to_string()))
    }

    /// New instance seeded from the operating system.
    pub fn create(&self, id: &str) -> Result<Box<dyn Strategy>, RegistryError> {
        let entry = self.entry(id)?;
        Ok((entry.factory)(ChaCha8Rng::from_entropy()))
    }

    /// New instance whose random choices are fully determined by `seed`.
    pub fn create_seeded(&self, id: &str, seed: u64) -> Result<Box<dyn Strategy>, RegistryError> {
        let entry = self.entry(id)?;
        Ok((entry.factory)(ChaCha8Rng::seed_from_u64(seed)))
    }

    pub fn display_name(&self, id: &str) -> Result<&str, RegistryError> {
        self.entry(id).map(|e| e.name.as_str())
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
