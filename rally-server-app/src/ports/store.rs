//! Document-store contract the ledger runs against. Implementations only
//! need point lookups, scans, inserts with store-assigned ids, field-level
//! patches, and two aggregate shapes (count and sum).

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    MatchId, PlayerId,
    player::{Handedness, Player},
    r#match::Match,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for crate::domain::LedgerError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound => crate::domain::LedgerError::NotFound("record".to_string()),
            StoreError::Backend(msg) => crate::domain::LedgerError::Storage(msg),
        }
    }
}

/// Initial player document. The store assigns the id and creation time.
#[derive(Clone, Debug)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub handedness: Handedness,
    pub is_active: bool,
    pub balance_usd_cents: u64,
    pub num_disqualifications: u32,
    pub in_active_match: bool,
}

/// Field-level patch for a player record. Absent fields are untouched.
#[derive(Clone, Debug, Default)]
pub struct PlayerPatch {
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
    pub balance_usd_cents: Option<u64>,
    pub num_disqualifications: Option<u32>,
    pub in_active_match: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerFilter {
    pub is_active: Option<bool>,
}

#[async_trait::async_trait]
pub trait PlayerStore {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, StoreError>;
    async fn find(&self) -> Result<Vec<Player>, StoreError>;
    async fn insert(&self, new: NewPlayer) -> Result<Player, StoreError>;
    /// Applies the patch and returns the updated record. `NotFound` when
    /// the id does not exist; nothing is written in that case.
    async fn update_fields(&self, id: PlayerId, patch: PlayerPatch) -> Result<Player, StoreError>;
    async fn delete(&self, id: PlayerId) -> Result<bool, StoreError>;
    async fn count(&self, filter: PlayerFilter) -> Result<u64, StoreError>;
    async fn sum_balance(&self) -> Result<u64, StoreError>;
}

/// Initial match document. The store assigns the id and creation time.
#[derive(Clone, Debug)]
pub struct NewMatch {
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub entry_fee_usd_cents: u64,
    pub prize_usd_cents: u64,
}

/// Field-level patch for a match record. `winner_id` is only ever set,
/// never cleared.
#[derive(Clone, Debug, Default)]
pub struct MatchPatch {
    pub player1_points: Option<u32>,
    pub player2_points: Option<u32>,
    pub winner_id: Option<PlayerId>,
    pub winner_points: Option<u32>,
    pub is_disqualification: Option<bool>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MatchFilter {
    /// Either side of the match.
    pub participant: Option<PlayerId>,
    pub winner: Option<PlayerId>,
}

impl MatchFilter {
    pub fn admits(&self, m: &Match) -> bool {
        if let Some(p) = self.participant
            && !m.is_participant(p)
        {
            return false;
        }
        if let Some(w) = self.winner
            && m.winner_id != Some(w)
        {
            return false;
        }
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchNumericField {
    WinnerPoints,
    PrizeUsdCents,
}

#[async_trait::async_trait]
pub trait MatchStore {
    async fn get(&self, id: MatchId) -> Result<Option<Match>, StoreError>;
    async fn find(&self) -> Result<Vec<Match>, StoreError>;
    async fn insert(&self, new: NewMatch) -> Result<Match, StoreError>;
    async fn update_fields(&self, id: MatchId, patch: MatchPatch) -> Result<Match, StoreError>;
    async fn count(&self, filter: MatchFilter) -> Result<u64, StoreError>;
    async fn sum(&self, filter: MatchFilter, field: MatchNumericField) -> Result<u64, StoreError>;
}
