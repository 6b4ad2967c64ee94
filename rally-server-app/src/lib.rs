use std::sync::Arc;

use crate::{
    ports::store::{MatchStore, PlayerStore},
    services::entity_locks::EntityLockRegistry,
    workflow::{
        dashboard::get::{GetDashboardUseCase, GetDashboardUseCaseImpl},
        r#match::{
            award::{AwardPointsUseCase, AwardPointsUseCaseImpl},
            create::{CreateMatchUseCase, CreateMatchUseCaseImpl},
            disqualify::{DisqualifyPlayerUseCase, DisqualifyPlayerUseCaseImpl},
            end::{EndMatchUseCase, EndMatchUseCaseImpl},
            finalize::FinalizeMatchWorkflowImpl,
            get::{GetMatchUseCase, GetMatchUseCaseImpl},
            list::{ListMatchesUseCase, ListMatchesUseCaseImpl},
        },
        player::{
            create::{CreatePlayerUseCase, CreatePlayerUseCaseImpl},
            delete::{DeletePlayerUseCase, DeletePlayerUseCaseImpl},
            deposit::{DepositUseCase, DepositUseCaseImpl},
            get::{GetPlayerUseCase, GetPlayerUseCaseImpl},
            list::{ListPlayersUseCase, ListPlayersUseCaseImpl},
            update::{UpdatePlayerUseCase, UpdatePlayerUseCaseImpl},
        },
    },
};

pub mod domain;
pub mod policy;
pub mod ports;
pub mod services;
pub mod workflow;

#[cfg(test)]
pub mod testing;

/// The wired ledger. Stores come in from the composition root; nothing in
/// here reaches for process-wide state.
pub struct Application {
    pub player_create_use_case: Box<dyn CreatePlayerUseCase + Send + Sync + 'static>,
    pub player_update_use_case: Arc<dyn UpdatePlayerUseCase + Send + Sync + 'static>,
    pub player_deposit_use_case: Box<dyn DepositUseCase + Send + Sync + 'static>,
    pub player_delete_use_case: Box<dyn DeletePlayerUseCase + Send + Sync + 'static>,
    pub player_get_use_case: Box<dyn GetPlayerUseCase + Send + Sync + 'static>,
    pub player_list_use_case: Box<dyn ListPlayersUseCase + Send + Sync + 'static>,

    pub match_create_use_case: Box<dyn CreateMatchUseCase + Send + Sync + 'static>,
    pub match_award_use_case: Box<dyn AwardPointsUseCase + Send + Sync + 'static>,
    pub match_disqualify_use_case: Box<dyn DisqualifyPlayerUseCase + Send + Sync + 'static>,
    pub match_end_use_case: Box<dyn EndMatchUseCase + Send + Sync + 'static>,
    pub match_get_use_case: Box<dyn GetMatchUseCase + Send + Sync + 'static>,
    pub match_list_use_case: Box<dyn ListMatchesUseCase + Send + Sync + 'static>,

    pub dashboard_get_use_case: Box<dyn GetDashboardUseCase + Send + Sync + 'static>,
}

pub fn build_application<PS, MS>(player_store: Arc<PS>, match_store: Arc<MS>) -> Application
where
    PS: PlayerStore + Send + Sync + 'static,
    MS: MatchStore + Send + Sync + 'static,
{
    let locks = Arc::new(EntityLockRegistry::new());

    let update_use_case = Arc::new(UpdatePlayerUseCaseImpl::new(
        player_store.clone(),
        match_store.clone(),
        locks.clone(),
    ));
    let finalize_workflow = Arc::new(FinalizeMatchWorkflowImpl::new(
        player_store.clone(),
        match_store.clone(),
    ));

    Application {
        player_create_use_case: Box::new(CreatePlayerUseCaseImpl::new(
            player_store.clone(),
            match_store.clone(),
        )),
        player_update_use_case: update_use_case.clone(),
        player_deposit_use_case: Box::new(DepositUseCaseImpl::new(update_use_case)),
        player_delete_use_case: Box::new(DeletePlayerUseCaseImpl::new(
            player_store.clone(),
            locks.clone(),
        )),
        player_get_use_case: Box::new(GetPlayerUseCaseImpl::new(
            player_store.clone(),
            match_store.clone(),
        )),
        player_list_use_case: Box::new(ListPlayersUseCaseImpl::new(
            player_store.clone(),
            match_store.clone(),
        )),

        match_create_use_case: Box::new(CreateMatchUseCaseImpl::new(
            player_store.clone(),
            match_store.clone(),
            locks.clone(),
        )),
        match_award_use_case: Box::new(AwardPointsUseCaseImpl::new(
            player_store.clone(),
            match_store.clone(),
            locks.clone(),
        )),
        match_disqualify_use_case: Box::new(DisqualifyPlayerUseCaseImpl::new(
            player_store.clone(),
            match_store.clone(),
            finalize_workflow.clone(),
            locks.clone(),
        )),
        match_end_use_case: Box::new(EndMatchUseCaseImpl::new(
            player_store.clone(),
            match_store.clone(),
            finalize_workflow,
            locks,
        )),
        match_get_use_case: Box::new(GetMatchUseCaseImpl::new(
            player_store.clone(),
            match_store.clone(),
        )),
        match_list_use_case: Box::new(ListMatchesUseCaseImpl::new(
            player_store.clone(),
            match_store,
        )),

        dashboard_get_use_case: Box::new(GetDashboardUseCaseImpl::new(player_store)),
    }
}
