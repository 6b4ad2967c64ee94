use std::sync::Arc;

use crate::domain::{LedgerError, LedgerResult};
use crate::policy;
use crate::ports::store::{MatchPatch, MatchStore, PlayerPatch, PlayerStore};
use crate::services::entity_locks::EntityLockRegistry;
use crate::workflow::r#match::{MatchView, assemble_match_view, finalize::FinalizeMatchWorkflow};

#[async_trait::async_trait]
pub trait DisqualifyPlayerUseCase {
    /// Disqualifies one participant: bumps their disqualification count,
    /// marks the match, and settles it with the opponent as winner.
    async fn disqualify_player(
        &self,
        match_id_raw: &str,
        player_id_raw: &str,
    ) -> LedgerResult<MatchView>;
}

pub struct DisqualifyPlayerUseCaseImpl<PS: PlayerStore, MS: MatchStore, F: FinalizeMatchWorkflow> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
    finalize_workflow: Arc<F>,
    locks: Arc<EntityLockRegistry>,
}

impl<PS: PlayerStore, MS: MatchStore, F: FinalizeMatchWorkflow>
    DisqualifyPlayerUseCaseImpl<PS, MS, F>
{
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
impl<PS, MS, F> DisqualifyPlayerUseCase for DisqualifyPlayerUseCaseImpl<PS, MS, F>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
    F: FinalizeMatchWorkflow + Send + Sync + 'static,
{
    async fn disqualify_player(
        &self,
        match_id_raw: &str,
        player_id_raw: &str,
    ) -> LedgerResult<MatchView> {
        let match_id = policy::parse_match_id(match_id_raw)?;
        let player_id = policy::parse_player_id(player_id_raw)?;

        let _match_guard = self.locks.lock_match(match_id).await;
        let (m, _) = policy::check_disqualify(
            &*self.player_store,
            &*self.match_store,
            match_id,
            player_id,
        )
        .await?;
        let winner_id = m
            .other_participant(player_id)
            .ok_or_else(|| LedgerError::InvalidFields {
                fields: vec!["pid".to_string()],
            })?;

        let _player_guards = self
            .locks
            .lock_player_pair(m.player1_id, m.player2_id)
            .await;

        // Re-read under the player lock; the count must not lose races
        // with concurrent deposits or profile updates.
        let disqualified = self
            .player_store
            .get(player_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("player {player_id}")))?;
        self.player_store
            .update_fields(
                player_id,
                PlayerPatch {
                    num_disqualifications: Some(disqualified.num_disqualifications + 1),
                    ..Default::default()
                },
            )
            .await?;

        let marked = self
            .match_store
            .update_fields(
                match_id,
                MatchPatch {
                    is_disqualification: Some(true),
                    ..Default::default()
                },
            )
            .await?;

        log::info!("disqualified player {player_id} from match {match_id}");
        let settled = self.finalize_workflow.finalize(&marked, winner_id).await?;
        assemble_match_view(&*self.player_store, settled).await
    }
}
