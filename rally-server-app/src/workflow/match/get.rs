use std::sync::Arc;

use crate::domain::{LedgerError, LedgerResult};
use crate::policy;
use crate::ports::store::{MatchStore, PlayerStore};
use crate::workflow::r#match::{MatchView, assemble_match_view};

#[async_trait::async_trait]
pub trait GetMatchUseCase {
    async fn get_match(&self, match_id_raw: &str) -> LedgerResult<MatchView>;
}

pub struct GetMatchUseCaseImpl<PS: PlayerStore, MS: MatchStore> {
    player_store: Arc<PS>,
    match_store: Arc<MS>,
}

impl<PS: PlayerStore, MS: MatchStore> GetMatchUseCaseImpl<PS, MS> {
    pub fn new(player_store: Arc<PS>, match_store: Arc<MS>) -> Self {
        Self {
            player_store,
            match_store,
        }
    }
}

#[async_trait::async_trait]
impl<PS, MS> GetMatchUseCase for GetMatchUseCaseImpl<PS, MS>
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    async fn get_match(&self, match_id_raw: &str) -> LedgerResult<MatchView> {
        let match_id = policy::parse_match_id(match_id_raw)?;
        let m = self
            .match_store
            .get(match_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("match {match_id}")))?;
        assemble_match_view(&*self.player_store, m).await
    }
}
