use axum::{
    Json,
    extract::{Path, Query, State},
};
use rally_server_app::domain::validate::ActivityFilter;
use rally_server_app::policy::{CreatePlayerInput, UpdatePlayerInput};
use rally_server_app::workflow::player::PlayerView;

use crate::app::ApiError;
use crate::http::{AppState, NumberOrText};

#[derive(serde::Serialize)]
pub struct JsonPlayer {
    pid: String,
    fname: String,
    lname: String,
    name: String,
    handed: &'static str,
    is_active: bool,
    balance_usd_cents: u64,
    num_dq: u32,
    in_active_match: bool,
    num_join: u64,
    num_won: u64,
    total_points: u64,
    total_prize_usd_cents: u64,
    efficiency: f64,
}

impl From<PlayerView> for JsonPlayer {
    fn from(view: PlayerView) -> Self {
        let efficiency = view.efficiency();
        Self {
            pid: view.id.to_string(),
            fname: view.first_name,
            lname: view.last_name,
            name: view.name,
            handed: view.handedness.label(),
            is_active: view.is_active,
            balance_usd_cents: view.balance_usd_cents,
            num_dq: view.num_disqualifications,
            in_active_match: view.in_active_match,
            num_join: view.stats.num_joined,
            num_won: view.stats.num_won,
            total_points: view.stats.total_points_won,
            total_prize_usd_cents: view.stats.total_prize_won_usd_cents,
            efficiency,
        }
    }
}

#[derive(serde::Deserialize)]
pub struct JsonPlayerCreate {
    fname: Option<String>,
    lname: Option<String>,
    handed: Option<String>,
    initial_balance_usd_cents: Option<NumberOrText>,
}

#[derive(serde::Deserialize)]
pub struct JsonPlayerUpdate {
    lname: Option<String>,
    is_active: Option<bool>,
}

#[derive(serde::Deserialize)]
pub struct JsonDeposit {
    amount_usd_cents: Option<NumberOrText>,
}

#[derive(serde::Deserialize)]
pub struct ListQuery {
    is_active: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<JsonPlayer>>, ApiError> {
    let filter = ActivityFilter::from_player_param(query.is_active.as_deref());
    let views = state.app.player_list_use_case.list_players(filter).await?;
    Ok(Json(views.into_iter().map(JsonPlayer::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<JsonPlayerCreate>,
) -> Result<Json<JsonPlayer>, ApiError> {
    let view = state
        .app
        .player_create_use_case
        .create_player(CreatePlayerInput {
            fname: body.fname,
            lname: body.lname,
            handed: body.handed,
            initial_balance_usd_cents: body
                .initial_balance_usd_cents
                .map(NumberOrText::into_raw),
        })
        .await?;
    Ok(Json(view.into()))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<JsonPlayer>, ApiError> {
    let view = state.app.player_get_use_case.get_player(&pid).await?;
    Ok(Json(view.into()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    Json(body): Json<JsonPlayerUpdate>,
) -> Result<Json<JsonPlayer>, ApiError> {
    let view = state
        .app
        .player_update_use_case
        .update_player(
            &pid,
            UpdatePlayerInput {
                lname: body.lname,
                is_active: body.is_active,
                deposit_usd_cents: None,
            },
        )
        .await?;
    Ok(Json(view.into()))
}

pub async fn delete_one(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<axum::http::StatusCode, ApiError> {
    state.app.player_delete_use_case.delete_player(&pid).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

pub async fn deposit(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    Json(body): Json<JsonDeposit>,
) -> Result<Json<JsonPlayer>, ApiError> {
    let view = state
        .app
        .player_deposit_use_case
        .deposit(&pid, body.amount_usd_cents.map(NumberOrText::into_raw))
        .await?;
    Ok(Json(view.into()))
}
