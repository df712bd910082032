//! Move-selection strategies for the chess bot tournament.
//!
//! Every strategy implements [`chess_core::Strategy`] and owns its random
//! source, so a registry seed fixes all of its choices. The ones that read
//! the time of day take a [`Clock`].
//!
//! ```ignore
//! let registry = StrategyRegistry::builtin();
//! let mut bot = registry.create_seeded("spectral", 7)?;
//! let mv = bot.decide(&Position::startpos())?;
//! ```

pub mod clock;
pub mod common;
pub mod numeric;
pub mod registry;

mod aggressive;
mod chaotic;
mod defensive;
mod diagonal;
mod first;
mod mimic;
mod paranoid;
mod random;
mod suicidal_king;
mod superstition;

pub mod fractal;
pub mod math;
pub mod ocd;
pub mod return_line;
pub mod revenge_luck;
pub mod spectral;
pub mod strategic;
pub mod worstfish;

pub use aggressive::AggressiveStrategy;
pub use chaotic::ChaoticStrategy;
pub use clock::{Clock, FixedClock, SystemClock};
pub use defensive::DefensiveStrategy;
pub use diagonal::DiagonalStrategy;
pub use first::FirstMoveStrategy;
pub use fractal::FractalStrategy;
pub use math::MathStrategy;
pub use mimic::MimicStrategy;
pub use numeric::NumericInstability;
pub use ocd::OcdStrategy;
pub use paranoid::{distance_score, ParanoidStrategy};
pub use random::RandomStrategy;
pub use registry::{Factory, RegistryError, StrategyRegistry};
pub use return_line::ReturnLineStrategy;
pub use revenge_luck::RevengeLuckStrategy;
pub use spectral::SpectralStrategy;
pub use strategic::StrategicStrategy;
pub use suicidal_king::SuicidalKingStrategy;
pub use superstition::SuperstitionStrategy;
pub use worstfish::WorstfishStrategy;
