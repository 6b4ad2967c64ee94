use std::sync::Arc;

use crate::domain::LedgerResult;
use crate::policy;
use crate::ports::store::{MatchPatch, MatchStore, PlayerStore};
use crate::services::entity_locks::EntityLockRegistry;
use crate::workflow::r#match::{MatchView, assemble_match_view};

#[async_trait::async_trait]
pub trait AwardPointsUseCase {
    /// Adds a strictly positive point delta to one participant's total.
    async fn award_points(
        &self,
        match_id_raw: &str,
        player_id_raw: &str,
        points_raw: Option<String>,
    ) -> LedgerResult<MatchView>;
}

pub struct AwardPointsUseCaseImpl<PS: PlayerStore, MS: MatchStore> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
    locks: Arc<EntityLockRegistry>,
}

impl<PS: PlayerStore, MS: MatchStore> AwardPointsUseCaseImpl<PS, MS> {
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
impl<PS, MS> AwardPointsUseCase for AwardPointsUseCaseImpl<PS, MS>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    async fn award_points(
        &self,
        match_id_raw: &str,
        player_id_raw: &str,
        points_raw: Option<String>,
    ) -> LedgerResult<MatchView> {
        let match_id = policy::parse_match_id(match_id_raw)?;
        let player_id = policy::parse_player_id(player_id_raw)?;

        let _guard = self.locks.lock_match(match_id).await;
        let (m, points) = policy::check_award(
            &*self.player_store,
            &*self.match_store,
            match_id,
            player_id,
            points_raw.as_deref(),
        )
        .await?;

        let patch = if player_id == m.player1_id {
            MatchPatch {
                player1_points: Some(m.player1_points + points),
                ..Default::default()
            }
        } else {
            MatchPatch {
                player2_points: Some(m.player2_points + points),
                ..Default::default()
            }
        };
        let updated = self.match_store.update_fields(match_id, patch).await?;

        assemble_match_view(&*self.player_store, updated).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LedgerError;
    use crate::testing::{MockMatchStore, MockPlayerStore, sample_player, seeded_match};

    fn use_case(
        players: Arc<MockPlayerStore>,
        matches: Arc<MockMatchStore>,
    ) -> AwardPointsUseCaseImpl<MockPlayerStore, MockMatchStore> {
        AwardPointsUseCaseImpl::new(players, matches, Arc::new(EntityLockRegistry::new()))
    }

    #[tokio::test]
    async fn awards_accumulate_per_side() {
        let players = Arc::new(MockPlayerStore::new());
        let matches = Arc::new(MockMatchStore::new());
        let a = players.seed(sample_player("Ada", "", 900)).await;
        let b = players.seed(sample_player("Bea", "", 900)).await;
        let m = matches.seed(seeded_match(a.id, b.id, 100, 300)).await;
        let use_case = use_case(players, matches.clone());

        let view = use_case
            .award_points(
                &m.id.to_string(),
                &a.id.to_string(),
                Some("5".to_string()),
            )
            .await
            .unwrap();
        assert_eq!(view.player1_points, 5);

        let view = use_case
            .award_points(
                &m.id.to_string(),
                &a.id.to_string(),
                Some("2".to_string()),
            )
            .await
            .unwrap();
        assert_eq!(view.player1_points, 7);
        assert_eq!(view.player2_points, 0);
    }

    #[tokio::test]
    async fn rejects_zero_points_and_outsiders() {
        let players = Arc::new(MockPlayerStore::new());
        let matches = Arc::new(MockMatchStore::new());
        let a = players.seed(sample_player("Ada", "", 900)).await;
        let b = players.seed(sample_player("Bea", "", 900)).await;
        let outsider = players.seed(sample_player("Eve", "", 0)).await;
        let m = matches.seed(seeded_match(a.id, b.id, 100, 300)).await;
        let use_case = use_case(players, matches.clone());

        let err = use_case
            .award_points(
                &m.id.to_string(),
                &a.id.to_string(),
                Some("0".to_string()),
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidFields {
                fields: vec!["points".to_string()]
            }
        );

        let err = use_case
            .award_points(
                &m.id.to_string(),
                &outsider.id.to_string(),
                Some("3".to_string()),
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidFields {
                fields: vec!["pid".to_string()]
            }
        );

        let stored = matches.get(m.id).await.unwrap().unwrap();
        assert_eq!(stored.player1_points, 0);
        assert_eq!(stored.player2_points, 0);
    }

    #[tokio::test]
    async fn ended_match_conflicts() {
        let players = Arc::new(MockPlayerStore::new());
        let matches = Arc::new(MockMatchStore::new());
        let a = players.seed(sample_player("Ada", "", 900)).await;
        let b = players.seed(sample_player("Bea", "", 900)).await;
        let mut ended = seeded_match(a.id, b.id, 100, 300);
        ended.ended_at = Some(chrono::Utc::now());
        let m = matches.seed(ended).await;
        let use_case = use_case(players, matches);

        let err = use_case
            .award_points(
                &m.id.to_string(),
                &a.id.to_string(),
                Some("3".to_string()),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, LedgerError::Conflict(_)));
    }
}
