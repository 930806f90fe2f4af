pub mod jobs;

use axum::{routing::get, Router};

pub fn get_router() -> Router<crate::SharedState> {
    Router::new()
        .route("/jobs", get(jobs::list).post(jobs::create))
        .route("/jobs/:id", get(jobs::get).delete(jobs::delete))
}
