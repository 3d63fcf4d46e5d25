use std::sync::Arc;

use clap::Parser;
use steamdash_backend::{http, util::datasets::DatasetStore, Tracing};
use tracing::info;

/// HTTP server that serves Steam profile statistics to the dashboard
/// frontend.
#[derive(Parser)]
struct Opts {
    /// Port for the HTTP server.
    #[clap(long, default_value = "3030")]
    port: u16,

    /// Directory that contains the generated JSON datasets.
    #[clap(long, default_value = "datasets")]
    data_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Tracing::setup("http_server")?;

    let opts: Opts = Opts::parse();
    let datasets = Arc::new(DatasetStore::new(&opts.data_dir));

    info! {
        "starting steamdash server at port {} serving datasets from '{}'",
        opts.port, opts.data_dir
    }

    warp::serve(http::routes(datasets))
        .run(([0, 0, 0, 0], opts.port))
        .await;

    Ok(())
}
