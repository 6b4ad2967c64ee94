use std::sync::Arc;

use chrono::Utc;

use crate::domain::{LedgerError, LedgerResult};
use crate::policy::{self, UpdatePlayerInput};
use crate::ports::store::{MatchStore, PlayerPatch, PlayerStore};
use crate::services::entity_locks::EntityLockRegistry;
use crate::workflow::player::{PlayerView, assemble_player_view};

#[async_trait::async_trait]
pub trait UpdatePlayerUseCase {
    /// Applies only the provided fields. Deposits are strictly additive;
    /// withdrawals happen only through match escrow and settlement.
    async fn update_player(
        &self,
        player_id_raw: &str,
        input: UpdatePlayerInput,
    ) -> LedgerResult<PlayerView>;
}

pub struct UpdatePlayerUseCaseImpl<PS: PlayerStore, MS: MatchStore> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
    locks: Arc<EntityLockRegistry>,
}

impl<PS: PlayerStore, MS: MatchStore> UpdatePlayerUseCaseImpl<PS, MS> {
    pub fn new(
        player_store: Arc<PS>,
        match_store: Arc<MS>,
        locks: Arc<EntityLockRegistry>,
    ) -> Self {
        Self {
            player_store,
            match_store,
            locks,
        }
    }
}

#[async_trait::async_trait]
impl<PS, MS> UpdatePlayerUseCase for UpdatePlayerUseCaseImpl<PS, MS>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    async fn update_player(
        &self,
        player_id_raw: &str,
        input: UpdatePlayerInput,
    ) -> LedgerResult<PlayerView> {
        let cmd = policy::validate_update_player(&input)?;
        let player_id = policy::parse_player_id(player_id_raw)?;

        let _guard = self.locks.lock_player(player_id).await;
        let player = self
            .player_store
            .get(player_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("player {player_id}")))?;

        let balance_usd_cents = match cmd.deposit_usd_cents {
            None => None,
            Some(amount) => Some(
                player
                    .balance_usd_cents
                    .checked_add(amount)
                    .ok_or_else(|| LedgerError::Conflict("balance overflow".to_string()))?,
            ),
        };

        let touched =
            cmd.last_name.is_some() || cmd.is_active.is_some() || balance_usd_cents.is_some();
        let updated = if touched {
            self.player_store
                .update_fields(
                    player_id,
                    PlayerPatch {
                        last_name: cmd.last_name,
                        is_active: cmd.is_active,
                        balance_usd_cents,
                        updated_at: Some(Utc::now()),
                        ..Default::default()
                    },
                )
                .await?
        } else {
            player
        };

        assemble_player_view(&*self.match_store, updated).await
    }
}
