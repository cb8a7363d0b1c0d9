// src/models/mod.rs

pub mod attempt;
pub mod feedback;
pub mod leaderboard;
pub mod talent;
