use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    response::{IntoResponse, Response},
    Json
};
use hyper::StatusCode;
use tracing::{debug, error, info};

use crate::{
    database::models::{Job, NewJob},
    errors::internal_error,
    store::StoreError,
    SharedState
};

pub async fn list(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>
) -> Result<Json<Vec<Job>>, (StatusCode, String)> {
    info!("[{}] Received GET request on /api/jobs", addr);
    let jobs = state.store()
        .list()
        .await
        .map_err(|err| failure(addr, err))?;

    debug!("[{}] Returning {} job(s)", addr, jobs.len());
    Ok(Json(jobs))
}

pub async fn get(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path(id): Path<i64>
) -> Result<Response, (StatusCode, String)> {
    info!("[{}] Received GET request on /api/jobs/{}", addr, id);
    let job = state.store()
        .get_by_id(id)
        .await
        .map_err(|err| failure(addr, err))?;

    match job {
        Some(job) => Ok(Json(job).into_response()),
        None => {
            debug!("[{}] Job {} not found", addr, id);
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

pub async fn create(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(new_job): Json<NewJob>
) -> Result<Json<Job>, (StatusCode, String)> {
    info!("[{}] Received POST request on /api/jobs", addr);
    let job = state.store()
        .create(&new_job)
        .await
        .map_err(|err| failure(addr, err))?;

    info!("[{}] Created job {}", addr, job.id);
    Ok(Json(job))
}

pub async fn delete(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path(id): Path<i64>
) -> Result<String, (StatusCode, String)> {
    info!("[{}] Received DELETE request on /api/jobs/{}", addr, id);
    state.store()
        .delete_by_id(id)
        .await
        .map_err(|err| failure(addr, err))?;

    Ok(format!("Job deleted with ID: {}", id))
}

fn failure(addr: SocketAddr, err: StoreError) -> (StatusCode, String) {
    error!("[{}] Job store error: {}", addr, err);
    internal_error((&err).into())
}
