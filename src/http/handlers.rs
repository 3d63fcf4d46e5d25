use crate::{
    http::models,
    stats::{spending, themes, top_games},
    util::datasets::DatasetStore,
    Status,
};
use chrono::{Datelike, Utc};
use std::{convert::Infallible, sync::Arc};
use tracing::{info, instrument, warn};
use warp::http::StatusCode;

#[instrument(level = "trace")]
pub async fn welcome() -> Result<impl warp::Reply, Infallible> {
    info!(
        http_request.request_method = "GET",
        http_request.request_url = "/",
        labels.handler = "welcome",
        "welcome"
    );
    Ok("welcome to steamdash")
}

#[instrument(level = "trace", skip(datasets))]
pub async fn get_profile(
    steam_id: String,
    datasets: Arc<DatasetStore>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    match datasets.load_profile(&steam_id) {
        Ok(snapshot) => Ok(Box::new(warp::reply::json(&snapshot))),
        Err(status) => Ok(Box::new(reply_error(status))),
    }
}

#[instrument(level = "trace", skip(top_games_op, datasets), fields(op = %top_games_op))]
pub async fn post_top_games(
    top_games_op: models::TopGamesOp,
    datasets: Arc<DatasetStore>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    match datasets.load_profile(&top_games_op.steam_id) {
        Ok(snapshot) => {
            let ranked = top_games::ranked(&snapshot.owned_games.games, top_games_op.count);
            info! {
                "top_games: returned {} of {} requested", ranked.len(), top_games_op.count
            }
            Ok(Box::new(warp::reply::json(&ranked)))
        }
        Err(status) => Ok(Box::new(reply_error(status))),
    }
}

#[instrument(level = "trace")]
pub async fn post_theme(theme_op: models::ThemeOp) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(themes::resolve_theme(&theme_op.title)))
}

#[instrument(level = "trace", skip(datasets))]
pub async fn post_spending(
    spending_op: models::SpendingOp,
    datasets: Arc<DatasetStore>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    match datasets.load_profile(&spending_op.steam_id) {
        Ok(snapshot) => {
            let estimate =
                spending::estimate_spending(&snapshot, Utc::now().year(), &mut rand::thread_rng());
            Ok(Box::new(warp::reply::json(&estimate)))
        }
        Err(status) => Ok(Box::new(reply_error(status))),
    }
}

fn reply_error(status: Status) -> StatusCode {
    warn! {"{status}"}
    match status {
        Status::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
