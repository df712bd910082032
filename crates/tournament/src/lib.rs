//! Round-robin tournaments between chess bot strategies
//!
//! This crate provides:
//! - A match engine that enforces a hard per-move deadline and turns any
//!   strategy misbehaviour into a forfeit
//! - A sequential round-robin scheduler with running standings
//! - PGN export of every game and a JSON summary of the run
//!
//! # Usage
//!
//! ```bash
//! # Every built-in strategy, two rounds
//! cargo run -p tournament -- run --rounds 2
//!
//! # A single game
//! cargo run -p tournament -- match strategic spectral
//! ```

mod config;
mod error;
mod match_runner;
mod recorder;
mod results;
mod standings;
mod tournament;
mod worker;

pub use config::*;
pub use error::*;
pub use match_runner::*;
pub use recorder::*;
pub use results::*;
pub use standings::*;
pub use tournament::*;
pub use worker::StrategyWorker;
