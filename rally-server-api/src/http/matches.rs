use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::SecondsFormat;
use rally_server_app::domain::validate::ActivityFilter;
use rally_server_app::policy::CreateMatchInput;
use rally_server_app::workflow::r#match::MatchView;

use crate::app::ApiError;
use crate::http::{AppState, NumberOrText};

#[derive(serde::Serialize)]
pub struct JsonMatch {
    mid: String,
    p1_id: String,
    p1_name: String,
    p1_points: u32,
    p2_id: String,
    p2_name: String,
    p2_points: u32,
    entry_fee_usd_cents: u64,
    prize_usd_cents: u64,
    winner_pid: Option<String>,
    is_dq: bool,
    is_active: bool,
    age: i64,
    ended_at: Option<String>,
}

impl From<MatchView> for JsonMatch {
    fn from(view: MatchView) -> Self {
        Self {
            mid: view.id.to_string(),
            p1_id: view.player1_id.to_string(),
            p1_name: view.player1_name,
            p1_points: view.player1_points,
            p2_id: view.player2_id.to_string(),
            p2_name: view.player2_name,
            p2_points: view.player2_points,
            entry_fee_usd_cents: view.entry_fee_usd_cents,
            prize_usd_cents: view.prize_usd_cents,
            winner_pid: view.winner_id.map(|id| id.to_string()),
            is_dq: view.is_disqualification,
            is_active: view.is_active,
            age: view.age_seconds,
            ended_at: view
                .ended_at
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true)),
        }
    }
}

#[derive(serde::Deserialize)]
pub struct JsonMatchCreate {
    pid1: Option<String>,
    pid2: Option<String>,
    entry_fee_usd_cents: Option<NumberOrText>,
    prize_usd_cents: Option<NumberOrText>,
}

#[derive(serde::Deserialize)]
pub struct JsonAward {
    pid: Option<String>,
    points: Option<NumberOrText>,
}

#[derive(serde::Deserialize)]
pub struct JsonDisqualify {
    pid: Option<String>,
}

#[derive(serde::Deserialize)]
pub struct ListQuery {
    is_active: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<JsonMatch>>, ApiError> {
    let filter = ActivityFilter::from_match_param(query.is_active.as_deref());
    let views = state.app.match_list_use_case.list_matches(filter).await?;
    Ok(Json(views.into_iter().map(JsonMatch::from).collect()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<JsonMatchCreate>,
) -> Result<Json<JsonMatch>, ApiError> {
    let view = state
        .app
        .match_create_use_case
        .create_match(CreateMatchInput {
            pid1: body.pid1,
            pid2: body.pid2,
            entry_fee_usd_cents: body.entry_fee_usd_cents.map(NumberOrText::into_raw),
            prize_usd_cents: body.prize_usd_cents.map(NumberOrText::into_raw),
        })
        .await?;
    Ok(Json(view.into()))
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(mid): Path<String>,
) -> Result<Json<JsonMatch>, ApiError> {
    let view = state.app.match_get_use_case.get_match(&mid).await?;
    Ok(Json(view.into()))
}

pub async fn award(
    State(state): State<AppState>,
    Path(mid): Path<String>,
    Json(body): Json<JsonAward>,
) -> Result<Json<JsonMatch>, ApiError> {
    let view = state
        .app
        .match_award_use_case
        .award_points(
            &mid,
            body.pid.as_deref().unwrap_or_default(),
            body.points.map(NumberOrText::into_raw),
        )
        .await?;
    Ok(Json(view.into()))
}

pub async fn disqualify(
    State(state): State<AppState>,
    Path(mid): Path<String>,
    Json(body): Json<JsonDisqualify>,
) -> Result<Json<JsonMatch>, ApiError> {
    let view = state
        .app
        .match_disqualify_use_case
        .disqualify_player(&mid, body.pid.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(view.into()))
}

pub async fn end(
    State(state): State<AppState>,
    Path(mid): Path<String>,
) -> Result<Json<JsonMatch>, ApiError> {
    let view = state.app.match_end_use_case.end_match(&mid).await?;
    Ok(Json(view.into()))
}
