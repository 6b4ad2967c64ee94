use std::sync::Arc;

use crate::domain::{LedgerError, LedgerResult};
use crate::policy;
use crate::ports::store::{MatchStore, PlayerStore};
use crate::services::entity_locks::EntityLockRegistry;
use crate::workflow::r#match::{MatchView, assemble_match_view, finalize::FinalizeMatchWorkflow};

#[async_trait::async_trait]
pub trait EndMatchUseCase {
    /// Ends an active, untied match; the higher scorer takes the prize.
    async fn end_match(&self, match_id_raw: &str) -> LedgerResult<MatchView>;
}

pub struct EndMatchUseCaseImpl<PS: PlayerStore, MS: MatchStore, F: FinalizeMatchWorkflow> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
    finalize_workflow: Arc<F>,
    locks: Arc<EntityLockRegistry>,
}

impl<PS: PlayerStore, MS: MatchStore, F: FinalizeMatchWorkflow> EndMatchUseCaseImpl<PS, MS, F> {
    pub fn new(
        player_store: Arc<PS>,
        match_store: Arc<MS>,
        finalize_workflow: Arc<F>,
        locks: Arc<EntityLockRegistry>,
    ) -> Self {
        Self {
            player_store,
            match_store,
            finalize_workflow,
            locks,
        }
    }
}

#[async_trait::async_trait]
impl<PS, MS, F> EndMatchUseCase for EndMatchUseCaseImpl<PS, MS, F>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
    F: FinalizeMatchWorkflow + Send + Sync + 'static,
{
    async fn end_match(&self, match_id_raw: &str) -> LedgerResult<MatchView> {
        let match_id = policy::parse_match_id(match_id_raw)?;

        let _match_guard = self.locks.lock_match(match_id).await;
        let m = policy::check_end_match(&*self.match_store, match_id).await?;
        let winner_id = m
            .leader()
            .ok_or_else(|| LedgerError::Conflict("match is tied".to_string()))?;

        let _player_guards = self
            .locks
            .lock_player_pair(m.player1_id, m.player2_id)
            .await;
        let settled = self.finalize_workflow.finalize(&m, winner_id).await?;

        assemble_match_view(&*self.player_store, settled).await
    }
}
