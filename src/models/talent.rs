// src/models/talent.rs

use sqlx::FromRow;
use uuid::Uuid;

/// Display data for a talent, as stored by the talent directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct TalentProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Image URL; empty when the talent never uploaded one.
    pub image: String,
}
