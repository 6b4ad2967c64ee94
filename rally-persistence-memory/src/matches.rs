use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use rally_server_app::domain::{MatchId, r#match::Match};
use rally_server_app::ports::store::{
    MatchFilter, MatchNumericField, MatchPatch, MatchStore, NewMatch, StoreError,
};

#[derive(Default)]
pub struct MemoryMatchStore {
    matches: DashMap<MatchId, Match>,
}

impl MemoryMatchStore {
    pub fn new() -> Self {
        Self {
            matches: DashMap::new(),
        }
    }
}

#[async_trait::async_trait]
impl MatchStore for MemoryMatchStore {
    async fn get(&self, id: MatchId) -> Result<Option<Match>, StoreError> {
        Ok(self.matches.get(&id).map(|entry| entry.clone()))
    }

    async fn find(&self) -> Result<Vec<Match>, StoreError> {
        Ok(self.matches.iter().map(|entry| entry.clone()).collect())
    }

    async fn insert(&self, new: NewMatch) -> Result<Match, StoreError> {
        let m = Match {
            id: MatchId(Uuid::new_v4()),
            player1_id: new.player1_id,
            player2_id: new.player2_id,
            entry_fee_usd_cents: new.entry_fee_usd_cents,
            prize_usd_cents: new.prize_usd_cents,
            player1_points: 0,
            player2_points: 0,
            winner_id: None,
            winner_points: 0,
            is_disqualification: false,
            created_at: Utc::now(),
            ended_at: None,
        };
        self.matches.insert(m.id, m.clone());
        Ok(m)
    }

    async fn update_fields(&self, id: MatchId, patch: MatchPatch) -> Result<Match, StoreError> {
        let mut entry = self.matches.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(points) = patch.player1_points {
            entry.player1_points = points;
        }
        if let Some(points) = patch.player2_points {
            entry.player2_points = points;
        }
        if let Some(winner) = patch.winner_id {
            entry.winner_id = Some(winner);
        }
        if let Some(points) = patch.winner_points {
            entry.winner_points = points;
        }
        if let Some(is_dq) = patch.is_disqualification {
            entry.is_disqualification = is_dq;
        }
        if let Some(ended_at) = patch.ended_at {
            entry.ended_at = Some(ended_at);
        }
        Ok(entry.clone())
    }

    async fn count(&self, filter: MatchFilter) -> Result<u64, StoreError> {
        Ok(self
            .matches
            .iter()
            .filter(|entry| filter.admits(entry))
            .count() as u64)
    }

    async fn sum(&self, filter: MatchFilter, field: MatchNumericField) -> Result<u64, StoreError> {
        Ok(self
            .matches
            .iter()
            .filter(|entry| filter.admits(entry))
            .map(|entry| match field {
                MatchNumericField::WinnerPoints => entry.winner_points as u64,
                MatchNumericField::PrizeUsdCents => entry.prize_usd_cents,
            })
            .sum())
    }
}
