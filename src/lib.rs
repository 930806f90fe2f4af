pub mod config;
pub mod database;
pub mod endpoints;
pub mod errors;
pub mod store;


use std::sync::Arc;

use axum::Router;
use store::JobStore;
use tower_http::trace::TraceLayer;

pub struct State {
    store: Box<dyn JobStore>
}

impl State {
    pub fn new(store: impl JobStore + 'static) -> State {
        State {
            store: Box::new(store)
        }
    }

    pub fn store(&self) -> &dyn JobStore {
        self.store.as_ref()
    }

}

pub type SharedState = Arc<State>;

pub fn app(state: SharedState) -> Router {
    endpoints::get_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
