use std::sync::Arc;

use crate::domain::LedgerResult;
use crate::policy::UpdatePlayerInput;
use crate::workflow::player::{PlayerView, update::UpdatePlayerUseCase};

#[async_trait::async_trait]
pub trait DepositUseCase {
    async fn deposit(
        &self,
        player_id_raw: &str,
        amount_usd_cents: Option<String>,
    ) -> LedgerResult<PlayerView>;
}

/// Public deposit surface. Routed through the update path so balance
/// arithmetic lives in exactly one place.
pub struct DepositUseCaseImpl<U: UpdatePlayerUseCase> {
    update_use_case: Arc<U>,
}

impl<U: UpdatePlayerUseCase> DepositUseCaseImpl<U> {
    pub fn new(update_use_case: Arc<U>) -> Self {
        Self { update_use_case }
    }
}

#[async_trait::async_trait]
impl<U> DepositUseCase for DepositUseCaseImpl<U>
where
    U: UpdatePlayerUseCase + Send + Sync + 'static,
{
    async fn deposit(
        &self,
        player_id_raw: &str,
        amount_usd_cents: Option<String>,
    ) -> LedgerResult<PlayerView> {
        self.update_use_case
            .update_player(
                player_id_raw,
                UpdatePlayerInput {
                    lname: None,
                    is_active: None,
                    deposit_usd_cents: amount_usd_cents,
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LedgerError;
    use crate::services::entity_locks::EntityLockRegistry;
    use crate::testing::{MockMatchStore, MockPlayerStore, sample_player};
    use crate::workflow::player::update::UpdatePlayerUseCaseImpl;

    fn deposit_use_case(
        players: Arc<MockPlayerStore>,
    ) -> DepositUseCaseImpl<UpdatePlayerUseCaseImpl<MockPlayerStore, MockMatchStore>> {
        let update = Arc::new(UpdatePlayerUseCaseImpl::new(
            players,
            Arc::new(MockMatchStore::new()),
            Arc::new(EntityLockRegistry::new()),
        ));
        DepositUseCaseImpl::new(update)
    }

    #[tokio::test]
    async fn rejects_malformed_amount_before_lookup() {
        let players = Arc::new(MockPlayerStore::new());
        let use_case = deposit_use_case(players);

        let err = use_case
            .deposit(
                &uuid::Uuid::new_v4().to_string(),
                Some("-100".to_string()),
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::InvalidFields {
                fields: vec!["amount_usd_cents".to_string()]
            }
        );
    }

    #[tokio::test]
    async fn credits_the_player() {
        let players = Arc::new(MockPlayerStore::new());
        let player = players.seed(sample_player("Bea", "", 100)).await;
        let use_case = deposit_use_case(players.clone());

        let view = use_case
            .deposit(&player.id.to_string(), Some("900".to_string()))
            .await
            .unwrap();
        assert_eq!(view.balance_usd_cents, 1000);
    }
}
