use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use rally_server_app::domain::{PlayerId, player::Player};
use rally_server_app::ports::store::{
    NewPlayer, PlayerFilter, PlayerPatch, PlayerStore, StoreError,
};

#[derive(Default)]
pub struct MemoryPlayerStore {
    players: DashMap<PlayerId, Player>,
}

impl MemoryPlayerStore {
    pub fn new() -> Self {
        Self {
            players: DashMap::new(),
        }
    }
}

#[async_trait::async_trait]
impl PlayerStore for MemoryPlayerStore {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.players.get(&id).map(|entry| entry.clone()))
    }

    async fn find(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.players.iter().map(|entry| entry.clone()).collect())
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
            .filter(|entry| {
                filter
                    .is_active
                    .is_none_or(|want| entry.is_active == want)
            })
            .count() as u64)
    }

    async fn sum_balance(&self) -> Result<u64, StoreError> {
        Ok(self.players.iter().map(|entry| entry.balance_usd_cents).sum())
    }
}
