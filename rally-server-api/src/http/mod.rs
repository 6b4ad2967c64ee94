use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use rally_server_app::Application;

mod dashboard;
mod matches;
mod players;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

/// Amounts arrive either as JSON integers or as digit strings; the policy
/// layer owns the grammar, so both shapes pass through as raw text.
#[derive(serde::Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    pub fn into_raw(self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s,
        }
    }
}

async fn ping() -> axum::http::StatusCode {
    axum::http::StatusCode::NO_CONTENT
}

pub fn router(app: Arc<Application>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .nest(
            "/v1",
            Router::new()
                .route("/players", get(players::list).post(players::create))
                .route(
                    "/players/{pid}",
                    get(players::get_one)
                        .patch(players::update)
                        .delete(players::delete_one),
                )
                .route("/players/{pid}/deposit", post(players::deposit))
                .route("/matches", get(matches::list).post(matches::create))
                .route("/matches/{mid}", get(matches::get_one))
                .route("/matches/{mid}/award", post(matches::award))
                .route("/matches/{mid}/disqualify", post(matches::disqualify))
                .route("/matches/{mid}/end", post(matches::end))
                .route("/dashboard", get(dashboard::get_one)),
        )
        .with_state(AppState { app })
}

pub async fn run(
    app: Arc<Application>,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) {
    let port = std::env::var("RALLY_HTTP_PORT")
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(3000);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind HTTP listener");

    info!("API server listening on port {port}");
    axum::serve(listener, router(app))
        .with_graceful_shutdown(shutdown_signal)
        .await
        .expect("HTTP server failed");

    info!("HTTP API shut down gracefully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_integers_and_digit_strings() {
        let n: NumberOrText = serde_json::from_str("1000").unwrap();
        assert_eq!(n.into_raw(), "1000");
        let s: NumberOrText = serde_json::from_str("\"007\"").unwrap();
        assert_eq!(s.into_raw(), "007");
        let neg: NumberOrText = serde_json::from_str("-5").unwrap();
        assert_eq!(neg.into_raw(), "-5");
    }
}
