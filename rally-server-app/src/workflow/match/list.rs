use std::sync::Arc;

use crate::domain::{LedgerResult, validate::ActivityFilter};
use crate::ports::store::{MatchStore, PlayerStore};
use crate::workflow::r#match::{MatchView, assemble_match_view};

#[async_trait::async_trait]
pub trait ListMatchesUseCase {
    /// Decorated matches passing the activity filter, richest prize
    /// first; ties break on creation time, oldest first.
    async fn list_matches(&self, filter: ActivityFilter) -> LedgerResult<Vec<MatchView>>;
}

pub struct ListMatchesUseCaseImpl<PS: PlayerStore, MS: MatchStore> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
}

impl<PS: PlayerStore, MS: MatchStore> ListMatchesUseCaseImpl<PS, MS> {
    pub fn new(player_store: Arc<PS>, match_store: Arc<MS>) -> Self {
        Self {
            player_store,
            match_store,
        }
    }
}

#[async_trait::async_trait]
impl<PS, MS> ListMatchesUseCase for ListMatchesUseCaseImpl<PS, MS>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    async fn list_matches(&self, filter: ActivityFilter) -> LedgerResult<Vec<MatchView>> {
        let matches = self.match_store.find().await?;
        let mut views = Vec::with_capacity(matches.len());
        for m in matches {
            let view = assemble_match_view(&*self.player_store, m).await?;
            if filter.admits(view.is_active) {
                views.push(view);
            }
        }
        views.sort_by(|a, b| {
            b.prize_usd_cents
                .cmp(&a.prize_usd_cents)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockMatchStore, MockPlayerStore, sample_player, seeded_match};

    #[tokio::test]
    async fn default_listing_is_active_only_richest_first() {
        let players = Arc::new(MockPlayerStore::new());
        let matches = Arc::new(MockMatchStore::new());
        let a = players.seed(sample_player("Ada", "", 900)).await;
        let b = players.seed(sample_player("Bea", "", 900)).await;

        let small = matches.seed(seeded_match(a.id, b.id, 10, 100)).await;
        let big = matches.seed(seeded_match(a.id, b.id, 10, 900)).await;
        let mut ended = seeded_match(a.id, b.id, 10, 500);
        ended.ended_at = Some(chrono::Utc::now());
        matches.seed(ended).await;

        let use_case = ListMatchesUseCaseImpl::new(players, matches);

        let active = use_case
            .list_matches(ActivityFilter::Only(true))
            .await
            .unwrap();
        let ids: Vec<_> = active.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![big.id, small.id]);

        let all = use_case.list_matches(ActivityFilter::All).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn equal_prizes_order_by_creation_time() {
        let players = Arc::new(MockPlayerStore::new());
        let matches = Arc::new(MockMatchStore::new());
        let a = players.seed(sample_player("Ada", "", 900)).await;
        let b = players.seed(sample_player("Bea", "", 900)).await;

        let mut first = seeded_match(a.id, b.id, 10, 300);
        first.created_at = chrono::Utc::now() - chrono::TimeDelta::seconds(60);
        let first = matches.seed(first).await;
        let second = matches.seed(seeded_match(a.id, b.id, 10, 300)).await;

        let use_case = ListMatchesUseCaseImpl::new(players, matches);
        let views = use_case.list_matches(ActivityFilter::All).await.unwrap();
        let ids: Vec<_> = views.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}
