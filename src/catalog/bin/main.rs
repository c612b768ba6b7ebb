include!("../../lib.rs");
use lambda_http::{run, Error};
use tracing::info;
use crate::catalog::controller::build_router;
use crate::core::controller::AppState;
use crate::core::domain::{Configuration, Runtime};
use crate::core::repository::RepositoryStore;
use crate::utils::logging::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let state = AppState::new(config.clone(), RepositoryStore::from_seed(config.seed));

    match config.runtime {
        Runtime::Lambda => {
            info!(runtime = %config.runtime, "starting books catalog");
            run(build_router::<lambda_http::Body>(state)).await
        }
        Runtime::Http => {
            let addr = config.socket_addr()?;
            info!(runtime = %config.runtime, %addr, "starting books catalog");
            axum::Server::bind(&addr)
                .serve(build_router::<axum::body::Body>(state).into_make_service())
                .await?;
            Ok(())
        }
    }
}
