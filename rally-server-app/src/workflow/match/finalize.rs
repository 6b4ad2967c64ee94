use std::sync::Arc;

use chrono::Utc;

use crate::domain::{LedgerError, LedgerResult, PlayerId, r#match::Match};
use crate::ports::store::{MatchPatch, MatchStore, PlayerPatch, PlayerStore};

/// Shared settlement: credits the prize, frees both participants, and
/// freezes the match record. Callers hold the match and player locks and
/// have already decided the winner.
#[async_trait::async_trait]
pub trait FinalizeMatchWorkflow {
    async fn finalize(&self, m: &Match, winner_id: PlayerId) -> LedgerResult<Match>;
}

pub struct FinalizeMatchWorkflowImpl<PS: PlayerStore, MS: MatchStore> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
}

impl<PS: PlayerStore, MS: MatchStore> FinalizeMatchWorkflowImpl<PS, MS> {
    pub fn new(player_store: Arc<PS>, match_store: Arc<MS>) -> Self {
        Self {
            player_store,
            match_store,
        }
    }
}

#[async_trait::async_trait]
impl<PS, MS> FinalizeMatchWorkflow for FinalizeMatchWorkflowImpl<PS, MS>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    async fn finalize(&self, m: &Match, winner_id: PlayerId) -> LedgerResult<Match> {
        let winner_points = m
            .points_of(winner_id)
            .ok_or_else(|| LedgerError::InvalidFields {
                fields: vec!["pid".to_string()],
            })?;

        let winner = self
            .player_store
            .get(winner_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("player {winner_id}")))?;
        let credited = winner
            .balance_usd_cents
            .checked_add(m.prize_usd_cents)
            .ok_or_else(|| LedgerError::Conflict("balance overflow".to_string()))?;
        self.player_store
            .update_fields(
                winner_id,
                PlayerPatch {
                    balance_usd_cents: Some(credited),
                    updated_at: Some(Utc::now()),
                    ..Default::default()
                },
            )
            .await?;

        for participant in [m.player1_id, m.player2_id] {
            self.player_store
                .update_fields(
                    participant,
                    PlayerPatch {
                        in_active_match: Some(false),
                        ..Default::default()
                    },
                )
                .await?;
        }

        let settled = self
            .match_store
            .update_fields(
                m.id,
                MatchPatch {
                    winner_id: Some(winner_id),
                    winner_points: Some(winner_points),
                    ended_at: Some(Utc::now()),
                    ..Default::default()
                },
            )
            .await?;

        log::info!(
            "settled match {} with winner {} ({} points, prize {})",
            settled.id,
            winner_id,
            winner_points,
            settled.prize_usd_cents
        );
        Ok(settled)
    }
}
