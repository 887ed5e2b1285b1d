use crate::env_vars::EnvVars;
use crate::http_handler::HandlerDeps;
use http_handler::function_handler;
use lambda_http::{run, service_fn, tracing, Error};
use shared::adapters::DynamoDbLinkStore;
use shared::core::UuidGenerator;

mod env_vars;
mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&config);
    let env = EnvVars::load()?;
    let deps = HandlerDeps {
        id_generator: UuidGenerator::new(),
        link_store: DynamoDbLinkStore::new(env.table_name, dynamodb_client),
    };

    run(service_fn(|event| function_handler(&deps, event))).await
}
