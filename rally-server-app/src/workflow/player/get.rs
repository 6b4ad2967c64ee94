use std::sync::Arc;

use crate::domain::{LedgerError, LedgerResult};
use crate::policy;
use crate::ports::store::{MatchStore, PlayerStore};
use crate::workflow::player::{PlayerView, assemble_player_view};

#[async_trait::async_trait]
pub trait GetPlayerUseCase {
    async fn get_player(&self, player_id_raw: &str) -> LedgerResult<PlayerView>;
}

pub struct GetPlayerUseCaseImpl<PS: PlayerStore, MS: MatchStore> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
}

impl<PS: PlayerStore, MS: MatchStore> GetPlayerUseCaseImpl<PS, MS> {
    pub fn new(player_store: Arc<PS>, match_store: Arc<MS>) -> Self {
        Self {
            player_store,
            match_store,
        }
    }
}

#[async_trait::async_trait]
impl<PS, MS> GetPlayerUseCase for GetPlayerUseCaseImpl<PS, MS>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    async fn get_player(&self, player_id_raw: &str) -> LedgerResult<PlayerView> {
        let player_id = policy::parse_player_id(player_id_raw)?;
        let player = self
            .player_store
            .get(player_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("player {player_id}")))?;
        assemble_player_view(&*self.match_store, player).await
    }
}
