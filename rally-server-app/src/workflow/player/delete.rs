use std::sync::Arc;

use crate::domain::LedgerResult;
use crate::policy;
use crate::ports::store::PlayerStore;
use crate::services::entity_locks::EntityLockRegistry;

#[async_trait::async_trait]
pub trait DeletePlayerUseCase {
    /// Removes a player. Rejected while the player is escrowed into an
    /// active match; historical matches do not block deletion.
    async fn delete_player(&self, player_id_raw: &str) -> LedgerResult<()>;
}

pub struct DeletePlayerUseCaseImpl<PS: PlayerStore> {
    player_store: Arc<PS>,
    locks: Arc<EntityLockRegistry>,
}

impl<PS: PlayerStore> DeletePlayerUseCaseImpl<PS> {
    pub fn new(player_store: Arc<PS>, locks: Arc<EntityLockRegistry>) -> Self {
        Self {
            player_store,
            locks,
        }
    }
}

#[async_trait::async_trait]
impl<PS> DeletePlayerUseCase for DeletePlayerUseCaseImpl<PS>
where
    PS: PlayerStore + Send + Sync + 'static,
{
    async fn delete_player(&self, player_id_raw: &str) -> LedgerResult<()> {
        let player_id = policy::parse_player_id(player_id_raw)?;

        let _guard = self.locks.lock_player(player_id).await;
        policy::check_delete_player(&*self.player_store, player_id).await?;
        self.player_store.delete(player_id).await?;
        log::info!("deleted player {player_id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LedgerError;
    use crate::testing::{MockPlayerStore, sample_player};

    fn use_case(players: Arc<MockPlayerStore>) -> DeletePlayerUseCaseImpl<MockPlayerStore> {
        DeletePlayerUseCaseImpl::new(players, Arc::new(EntityLockRegistry::new()))
    }

    #[tokio::test]
    async fn deletes_idle_player() {
        let players = Arc::new(MockPlayerStore::new());
        let player = players.seed(sample_player("Cal", "", 100)).await;
        let use_case = use_case(players.clone());

        use_case.delete_player(&player.id.to_string()).await.unwrap();
        assert!(players.get(player.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn refuses_while_escrowed() {
        let players = Arc::new(MockPlayerStore::new());
        let mut seeded = sample_player("Cal", "", 100);
        seeded.in_active_match = true;
        let player = players.seed(seeded).await;
        let use_case = use_case(players.clone());

        let err = use_case
            .delete_player(&player.id.to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::Conflict(_)));
        assert!(players.get(player.id).await.unwrap().is_some());
    }
}
