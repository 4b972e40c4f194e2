use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::magazines_service::MagazinesService,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new().route("/api/v1/magazines", get(get_magazines))
}

async fn get_magazines(
    State(magazines_service): State<Arc<dyn MagazinesService>>,
    Query(pagination): Query<input::Pagination>,
) -> Result<Json<output::Page<output::Magazine>>, Error> {
    let page = magazines_service.list_magazines(pagination).await?;

    Ok(Json(page))
}
