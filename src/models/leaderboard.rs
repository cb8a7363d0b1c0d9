// src/models/leaderboard.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{attempt::RankedEntry, talent::TalentProfile};

/// One row of the leaderboard response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub first_name: String,
    pub last_name: String,
    pub image: String,
    pub total_score: i64,
    pub rank: i64,
}

impl LeaderboardEntry {
    /// Missing profiles render as empty name and image.
    pub fn from_ranked(entry: &RankedEntry, profile: Option<&TalentProfile>) -> Self {
        let profile = profile.cloned().unwrap_or_default();
        Self {
            first_name: profile.first_name,
            last_name: profile.last_name,
            image: profile.image,
            total_score: entry.total_score,
            rank: entry.rank,
        }
    }
}

/// Response body of both leaderboard endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub self_performer: LeaderboardEntry,
    /// Top entries by dense rank, never containing the caller.
    pub all_performers: Vec<LeaderboardEntry>,
}

/// Query string of the problem-of-the-day leaderboard.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemOfTheDayParams {
    /// Defaults to today (UTC).
    pub search_date: Option<NaiveDate>,
}

/// Query string of the all-time leaderboard.
#[derive(Debug, Default, Deserialize)]
pub struct AllTimeParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}
