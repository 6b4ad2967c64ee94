use axum::{Json, extract::State};
use rally_server_app::workflow::dashboard::DashboardView;

use crate::app::ApiError;
use crate::http::AppState;

#[derive(serde::Serialize)]
pub struct JsonDashboard {
    num_total: u64,
    num_active: u64,
    num_inactive: u64,
    avg_balance_usd_cents: u64,
}

impl From<DashboardView> for JsonDashboard {
    fn from(view: DashboardView) -> Self {
        Self {
            num_total: view.num_total,
            num_active: view.num_active,
            num_inactive: view.num_inactive,
            avg_balance_usd_cents: view.avg_balance_usd_cents,
        }
    }
}

pub async fn get_one(State(state): State<AppState>) -> Result<Json<JsonDashboard>, ApiError> {
    let view = state.app.dashboard_get_use_case.get_dashboard().await?;
    Ok(Json(view.into()))
}
