//! Maze arena: plays configured agents on a maze and reports how they did.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate every agent described in a config file
//! cargo run -p arena -- run --config arena.toml --out results.json
//!
//! # Watch one agent play a single game (per-move logs at debug level)
//! RUST_LOG=debug cargo run -p arena -- play --agent astar --layout mazes/small.txt
//! ```

mod config;
mod error;
mod registry;
mod results;
mod runner;

pub use config::*;
pub use error::*;
pub use registry::*;
pub use results::*;
pub use runner::*;
