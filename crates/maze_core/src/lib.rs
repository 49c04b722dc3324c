pub mod game;
pub mod heuristics;
pub mod layout;

// Re-export the game so hosts need a single import
pub use game::*;
pub use heuristics::*;
pub use layout::*;
