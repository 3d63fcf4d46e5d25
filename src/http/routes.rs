use crate::util::datasets::DatasetStore;
use std::sync::Arc;
use tracing::warn;
use warp::{self, Filter};

use super::{handlers, models, resources::*};

/// Returns a Filter with all available routes.
pub fn routes(
    datasets: Arc<DatasetStore>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    home()
        .or(get_profile(Arc::clone(&datasets)))
        .or(post_top_games(Arc::clone(&datasets)))
        .or(post_theme())
        .or(post_spending(datasets))
        .or_else(|e| async {
            warn! {"Rejected route: {:?}", e};
            Err(e)
        })
}

/// GET /
fn home() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!().and(warp::get()).and_then(handlers::welcome)
}

/// GET /profile/{steam_id}
fn get_profile(
    datasets: Arc<DatasetStore>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("profile" / String)
        .and(warp::get())
        .and(with_datasets(datasets))
        .and_then(handlers::get_profile)
}

/// POST /top_games
fn post_top_games(
    datasets: Arc<DatasetStore>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("top_games")
        .and(warp::post())
        .and(json_body::<models::TopGamesOp>())
        .and(with_datasets(datasets))
        .and_then(handlers::post_top_games)
}

/// POST /theme
fn post_theme() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("theme")
        .and(warp::post())
        .and(json_body::<models::ThemeOp>())
        .and_then(handlers::post_theme)
}

/// POST /spending
fn post_spending(
    datasets: Arc<DatasetStore>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("spending")
        .and(warp::post())
        .and(json_body::<models::SpendingOp>())
        .and(with_datasets(datasets))
        .and_then(handlers::post_spending)
}

fn json_body<T: serde::de::DeserializeOwned + Send>(
) -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(16 * 1024).and(warp::body::json())
}
