use std::sync::Arc;

use crate::domain::LedgerResult;
use crate::ports::store::{PlayerFilter, PlayerStore};
use crate::workflow::dashboard::DashboardView;

#[async_trait::async_trait]
pub trait GetDashboardUseCase {
    async fn get_dashboard(&self) -> LedgerResult<DashboardView>;
}

pub struct GetDashboardUseCaseImpl<PS: PlayerStore> {
    player_store: Arc<PS>,
}

impl<PS: PlayerStore> GetDashboardUseCaseImpl<PS> {
    pub fn new(player_store: Arc<PS>) -> Self {
        Self { player_store }
    }
}

#[async_trait::async_trait]
impl<PS> GetDashboardUseCase for GetDashboardUseCaseImpl<PS>
where
    PS: PlayerStore + Send + Sync + 'static,
{
    async fn get_dashboard(&self) -> LedgerResult<DashboardView> {
        let num_total = self.player_store.count(PlayerFilter::default()).await?;
        let num_active = self
            .player_store
            .count(PlayerFilter {
                is_active: Some(true),
            })
            .await?;
        let num_inactive = num_total - num_active;
        let avg_balance_usd_cents = if num_total == 0 {
            0
        } else {
            self.player_store.sum_balance().await? / num_total
        };
        Ok(DashboardView {
            num_total,
            num_active,
            num_inactive,
            avg_balance_usd_cents,
        })
    }
}
