use lambda_http::{run, Error};
use library_catalog::core::controller::AppState;
use library_catalog::core::domain::Configuration;
use library_catalog::core::repository::RepositoryStore;
use library_catalog::server::app;
use library_catalog::utils::logs::setup_tracing;
use tracing::info;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/images-test.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let (branch, default_store) = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        ("dev", RepositoryStore::LocalDynamoDB)
    } else {
        ("prod", RepositoryStore::DynamoDB)
    };
    let store = RepositoryStore::resolve(std::env::var("LIBRARY_STORE").ok(), default_store);

    let state = AppState::build(Configuration::from_env(branch), store).await;
    info!(branch = state.config.branch_id.as_str(), store = ?state.store,
        authors = state.config.authors_table.as_str(), books = state.config.books_table.as_str(),
        "starting library catalog");

    run(app(state)).await
}
