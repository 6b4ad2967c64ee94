use std::sync::Arc;

use crate::domain::LedgerResult;
use crate::policy::{self, CreatePlayerInput};
use crate::ports::store::{MatchStore, NewPlayer, PlayerStore};
use crate::workflow::player::{PlayerView, assemble_player_view};

#[async_trait::async_trait]
pub trait CreatePlayerUseCase {
    async fn create_player(&self, input: CreatePlayerInput) -> LedgerResult<PlayerView>;
}

pub struct CreatePlayerUseCaseImpl<PS: PlayerStore, MS: MatchStore> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
}

impl<PS: PlayerStore, MS: MatchStore> CreatePlayerUseCaseImpl<PS, MS> {
    pub fn new(player_store: Arc<PS>, match_store: Arc<MS>) -> Self {
        Self {
            player_store,
            match_store,
        }
    }
}

#[async_trait::async_trait]
impl<PS, MS> CreatePlayerUseCase for CreatePlayerUseCaseImpl<PS, MS>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    async fn create_player(&self, input: CreatePlayerInput) -> LedgerResult<PlayerView> {
        let cmd = policy::validate_create_player(&input)?;
        let player = self
            .player_store
            .insert(NewPlayer {
                first_name: cmd.first_name,
                last_name: cmd.last_name,
                handedness: cmd.handedness,
                is_active: true,
                balance_usd_cents: cmd.initial_balance_usd_cents,
                num_disqualifications: 0,
                in_active_match: false,
            })
            .await?;
        log::info!("created player {}", player.id);
        assemble_player_view(&*self.match_store, player).await
    }
}
