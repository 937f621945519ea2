use lambda_runtime::{service_fn, Error};
use rambda_func::{handler, init_from_env};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = init_from_env()?;
    info!("Starting function runtime (log format: {})", config.format);

    lambda_runtime::run(service_fn(handler)).await
}
