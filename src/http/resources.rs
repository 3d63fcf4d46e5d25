use std::{convert::Infallible, sync::Arc};
use warp::{self, Filter};

use crate::util::datasets::DatasetStore;

pub fn with_datasets(
    datasets: Arc<DatasetStore>,
) -> impl Filter<Extract = (Arc<DatasetStore>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&datasets))
}
