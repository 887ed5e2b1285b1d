use crate::auth_handler::HandlerDeps;
use auth_handler::function_handler;
use lambda_runtime::{run, service_fn, tracing, Error};
use shared::auth::HmacTokenVerifier;

mod auth_handler;
mod env_vars;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let env = env_vars::EnvVars::load()?;
    let deps = HandlerDeps {
        token_verifier: HmacTokenVerifier::new(&env.jwt_secret),
    };

    run(service_fn(|event| function_handler(&deps, event))).await
}
