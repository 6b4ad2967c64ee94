use std::sync::Arc;

use chrono::Utc;

use crate::domain::{LedgerResult, PlayerId};
use crate::policy::{self, CreateMatchInput};
use crate::ports::store::{MatchStore, NewMatch, PlayerPatch, PlayerStore};
use crate::services::entity_locks::EntityLockRegistry;
use crate::workflow::r#match::{MatchView, assemble_match_view};

#[async_trait::async_trait]
pub trait CreateMatchUseCase {
    /// Escrows the entry fee from both players, marks them busy, and
    /// inserts a fresh match at 0/0. One logical transaction: a failure
    /// part-way is compensated before the error is returned.
    async fn create_match(&self, input: CreateMatchInput) -> LedgerResult<MatchView>;
}

pub struct CreateMatchUseCaseImpl<PS: PlayerStore, MS: MatchStore> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
    locks: Arc<EntityLockRegistry>,
}

impl<PS: PlayerStore, MS: MatchStore> CreateMatchUseCaseImpl<PS, MS> {
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

impl<PS, MS> CreateMatchUseCaseImpl<PS, MS>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    /// Escrow one side: debit the fee and raise the busy flag.
    async fn escrow(&self, player_id: PlayerId, balance_after: u64) -> LedgerResult<()> {
        self.player_store
            .update_fields(
                player_id,
                PlayerPatch {
                    balance_usd_cents: Some(balance_after),
                    in_active_match: Some(true),
                    updated_at: Some(Utc::now()),
                    ..Default::default()
                },
            )
            .await?;
        Ok(())
    }

    /// Best-effort compensation for a half-applied escrow.
    async fn release_escrow(&self, player_id: PlayerId, balance_before: u64) {
        let result = self
            .player_store
            .update_fields(
                player_id,
                PlayerPatch {
                    balance_usd_cents: Some(balance_before),
                    in_active_match: Some(false),
                    updated_at: Some(Utc::now()),
                    ..Default::default()
                },
            )
            .await;
        if let Err(e) = result {
            log::error!("failed to release escrow for player {player_id}: {e}");
        }
    }
}

#[async_trait::async_trait]
impl<PS, MS> CreateMatchUseCase for CreateMatchUseCaseImpl<PS, MS>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    async fn create_match(&self, input: CreateMatchInput) -> LedgerResult<MatchView> {
        let cmd = policy::validate_create_match(&input)?;

        let _guards = self
            .locks
            .lock_player_pair(cmd.player1_id, cmd.player2_id)
            .await;
        let (player1, player2) = policy::check_match_funding(&*self.player_store, &cmd).await?;

        let fee = cmd.entry_fee_usd_cents;
        self.escrow(player1.id, player1.balance_usd_cents - fee)
            .await?;
        if let Err(e) = self.escrow(player2.id, player2.balance_usd_cents - fee).await {
            self.release_escrow(player1.id, player1.balance_usd_cents)
                .await;
            return Err(e);
        }

        let inserted = self
            .match_store
            .insert(NewMatch {
                player1_id: cmd.player1_id,
                player2_id: cmd.player2_id,
                entry_fee_usd_cents: cmd.entry_fee_usd_cents,
                prize_usd_cents: cmd.prize_usd_cents,
            })
            .await;
        let m = match inserted {
            Ok(m) => m,
            Err(e) => {
                self.release_escrow(player1.id, player1.balance_usd_cents)
                    .await;
                self.release_escrow(player2.id, player2.balance_usd_cents)
                    .await;
                return Err(e.into());
            }
        };

        log::info!(
            "created match {} between {} and {} (fee {}, prize {})",
            m.id,
            m.player1_id,
            m.player2_id,
            m.entry_fee_usd_cents,
            m.prize_usd_cents
        );
        assemble_match_view(&*self.player_store, m).await
    }
}
