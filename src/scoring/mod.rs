// src/scoring/mod.rs

//! Score pipelines.
//!
//! Leaderboard: attempts -> best per question -> total per talent -> dense
//! rank -> top slice + self entry. Feedback: answers -> keyword/group/overall
//! ratios -> bucket.

pub mod aggregate;
pub mod bucket;
pub mod feedback;
pub mod leaderboard;
pub mod rank;
pub mod rollup;
pub mod summarize;

pub use feedback::{feedback_report, talent_feedback};
pub use leaderboard::build_leaderboard;
