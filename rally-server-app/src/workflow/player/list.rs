use std::sync::Arc;

use crate::domain::{LedgerResult, validate::ActivityFilter};
use crate::ports::store::{MatchStore, PlayerStore};
use crate::workflow::player::{PlayerView, assemble_player_view};

#[async_trait::async_trait]
pub trait ListPlayersUseCase {
    /// Decorated players passing the activity filter, ascending by
    /// display name.
    async fn list_players(&self, filter: ActivityFilter) -> LedgerResult<Vec<PlayerView>>;
}

pub struct ListPlayersUseCaseImpl<PS: PlayerStore, MS: MatchStore> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
}

impl<PS: PlayerStore, MS: MatchStore> ListPlayersUseCaseImpl<PS, MS> {
    pub fn new(player_store: Arc<PS>, match_store: Arc<MS>) -> Self {
        Self {
            player_store,
            match_store,
        }
    }
}

#[async_trait::async_trait]
impl<PS, MS> ListPlayersUseCase for ListPlayersUseCaseImpl<PS, MS>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    async fn list_players(&self, filter: ActivityFilter) -> LedgerResult<Vec<PlayerView>> {
        let players = self.player_store.find().await?;
        let mut views = Vec::with_capacity(players.len());
        for player in players {
            if !filter.admits(player.is_active) {
                continue;
            }
            views.push(assemble_player_view(&*self.match_store, player).await?);
        }
        views.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockMatchStore, MockPlayerStore, sample_player};

    #[tokio::test]
    async fn filters_then_sorts_by_name() {
        let players = Arc::new(MockPlayerStore::new());
        let matches = Arc::new(MockMatchStore::new());
        players.seed(sample_player("Zoe", "", 0)).await;
        players.seed(sample_player("Ada", "Lovelace", 0)).await;
        let mut inactive = sample_player("Mia", "", 0);
        inactive.is_active = false;
        players.seed(inactive).await;

        let use_case = ListPlayersUseCaseImpl::new(players, matches);

        let all = use_case.list_players(ActivityFilter::All).await.unwrap();
        let names: Vec<&str> = all.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Ada Lovelace", "Mia", "Zoe"]);

        let active = use_case
            .list_players(ActivityFilter::Only(true))
            .await
            .unwrap();
        let names: Vec<&str> = active.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Ada Lovelace", "Zoe"]);
    }
}
