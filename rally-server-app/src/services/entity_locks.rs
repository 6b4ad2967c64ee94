//! Per-entity write serialization. Every mutating use case takes the lock
//! of each entity it writes before re-checking state, so check-then-act
//! windows cannot interleave. Lock order is fixed — match before players,
//! players in ascending id order — which rules out lock cycles.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::domain::{MatchId, PlayerId};

#[derive(Default)]
pub struct EntityLockRegistry {
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl EntityLockRegistry {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    async fn acquire(&self, key: Uuid) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    pub async fn lock_player(&self, id: PlayerId) -> OwnedMutexGuard<()> {
        self.acquire(id.0).await
    }

    pub async fn lock_match(&self, id: MatchId) -> OwnedMutexGuard<()> {
        self.acquire(id.0).await
    }

    /// Locks two players in ascending id order.
    pub async fn lock_player_pair(
        &self,
        a: PlayerId,
        b: PlayerId,
    ) -> (OwnedMutexGuard<()>, OwnedMutexGuard<()>) {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let first_guard = self.acquire(first.0).await;
        let second_guard = self.acquire(second.0).await;
        (first_guard, second_guard)
    }
}
