use super::{MessageResponse, RosterError, RosterHandler, SignupQuery};
use crate::model::Catalog;
use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use std::path::Path as FsPath;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const INDEX_PATH: &str = "/static/index.html";

/// Builds the HTTP surface: the roster API plus static assets under
/// `/static`.
pub fn create_roster_route(
    roster_handler: RosterHandler,
    static_dir: impl AsRef<FsPath>,
) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/activities", get(list_activities))
        .route("/activities/:activity_name/signup", post(signup))
        .route(
            "/activities/:activity_name/participants/:email",
            delete(remove_participant),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(roster_handler)
}

async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

async fn list_activities(State(handler): State<RosterHandler>) -> Json<Catalog> {
    Json(handler.activities().await)
}

async fn signup(
    State(handler): State<RosterHandler>,
    Path(activity_name): Path<String>,
    query: SignupQuery,
) -> Result<Json<MessageResponse>, RosterError> {
    handler.signup(&activity_name, &query.email).await.map(Json)
}

async fn remove_participant(
    State(handler): State<RosterHandler>,
    Path((activity_name, email)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, RosterError> {
    handler
        .remove_participant(&activity_name, &email)
        .await
        .map(Json)
}
