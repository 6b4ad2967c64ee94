//! Behavioral store fakes for use-case tests. They honor the full port
//! contract over a DashMap so tests can assert real state transitions.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{
    MatchId, PlayerId,
    player::{Handedness, Player},
    r#match::Match,
};
use crate::ports::store::{
    MatchFilter, MatchNumericField, MatchPatch, MatchStore, NewMatch, NewPlayer, PlayerFilter,
    PlayerPatch, PlayerStore, StoreError,
};

pub fn sample_player(first: &str, last: &str, balance: u64) -> Player {
    Player {
        id: PlayerId(Uuid::new_v4()),
        first_name: first.to_string(),
        last_name: last.to_string(),
        handedness: Handedness::Right,
        is_active: true,
        balance_usd_cents: balance,
        num_disqualifications: 0,
        in_active_match: false,
        created_at: Utc::now(),
        updated_at: None,
    }
}

pub fn seeded_match(p1: PlayerId, p2: PlayerId, fee: u64, prize: u64) -> Match {
    Match {
        id: MatchId(Uuid::new_v4()),
        player1_id: p1,
        player2_id: p2,
        entry_fee_usd_cents: fee,
        prize_usd_cents: prize,
        player1_points: 0,
        player2_points: 0,
        winner_id: None,
        winner_points: 0,
        is_disqualification: false,
        created_at: Utc::now(),
        ended_at: None,
    }
}

#[derive(Default)]
pub struct MockPlayerStore {
    players: DashMap<PlayerId, Player>,
}

impl MockPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, player: Player) -> Player {
        self.players.insert(player.id, player.clone());
        player
    }
}

#[async_trait::async_trait]
impl PlayerStore for MockPlayerStore {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.players.get(&id).map(|p| p.clone()))
    }

    async fn find(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.players.iter().map(|p| p.clone()).collect())
    }

    async fn insert(&self, new: NewPlayer) -> Result<Player, StoreError> {
        let player = Player {
            id: PlayerId(Uuid::new_v4()),
            first_name: new.first_name,
            last_name: new.last_name,
            handedness: new.handedness,
            is_active: new.is_active,
            balance_usd_cents: new.balance_usd_cents,
            num_disqualifications: new.num_disqualifications,
            in_active_match: new.in_active_match,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.players.insert(player.id, player.clone());
        Ok(player)
    }

    async fn update_fields(&self, id: PlayerId, patch: PlayerPatch) -> Result<Player, StoreError> {
        let mut entry = self.players.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(last_name) = patch.last_name {
            entry.last_name = last_name;
        }
        if let Some(is_active) = patch.is_active {
            entry.is_active = is_active;
        }
        if let Some(balance) = patch.balance_usd_cents {
            entry.balance_usd_cents = balance;
        }
        if let Some(num_dq) = patch.num_disqualifications {
            entry.num_disqualifications = num_dq;
        }
        if let Some(busy) = patch.in_active_match {
            entry.in_active_match = busy;
        }
        if let Some(updated_at) = patch.updated_at {
            entry.updated_at = Some(updated_at);
        }
        Ok(entry.clone())
    }

    async fn delete(&self, id: PlayerId) -> Result<bool, StoreError> {
        Ok(self.players.remove(&id).is_some())
    }

    async fn count(&self, filter: PlayerFilter) -> Result<u64, StoreError> {
        Ok(self
            .players
            .iter()
            .filter(|p| filter.is_active.is_none_or(|want| p.is_active == want))
            .count() as u64)
    }

    async fn sum_balance(&self) -> Result<u64, StoreError> {
        Ok(self.players.iter().map(|p| p.balance_usd_cents).sum())
    }
}

#[derive(Default)]
pub struct MockMatchStore {
    matches: DashMap<MatchId, Match>,
}

impl MockMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, m: Match) -> Match {
        self.matches.insert(m.id, m.clone());
        m
    }
}

#[async_trait::async_trait]
impl MatchStore for MockMatchStore {
    async fn get(&self, id: MatchId) -> Result<Option<Match>, StoreError> {
        Ok(self.matches.get(&id).map(|m| m.clone()))
    }

    async fn find(&self) -> Result<Vec<Match>, StoreError> {
        Ok(self.matches.iter().map(|m| m.clone()).collect())
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
        Ok(self.matches.iter().filter(|m| filter.admits(m)).count() as u64)
    }

    async fn sum(&self, filter: MatchFilter, field: MatchNumericField) -> Result<u64, StoreError> {
        Ok(self
            .matches
            .iter()
            .filter(|m| filter.admits(m))
            .map(|m| match field {
                MatchNumericField::WinnerPoints => m.winner_points as u64,
                MatchNumericField::PrizeUsdCents => m.prize_usd_cents,
            })
            .sum())
    }
}
