//! Position evaluation for the move heuristic

pub mod heuristic;
pub mod patterns;

// Re-exports
pub use heuristic::evaluate_position;
pub use patterns::{line_score, PatternScore};
