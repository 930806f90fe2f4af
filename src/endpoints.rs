pub(crate) mod api;

use axum::Router;

use crate::SharedState;

pub fn get_router() -> Router<SharedState> {
    Router::new()
        .nest("/api", api::get_router())
}
