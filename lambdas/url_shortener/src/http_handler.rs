use lambda_http::http::{Method, StatusCode};
use lambda_http::request::RequestContext;
use lambda_http::{tracing, Error, IntoResponse, Request, RequestExt, RequestPayloadExt, Response};
use serde::{Deserialize, Serialize};
use shared::core::{IdGenerator, LinkStore};
use shared::utils::{json_response, message_response, redirect_response};

#[derive(Serialize, Deserialize)]
pub struct ShortenUrlRequest {
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ShortenUrlResponse {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}

pub(crate) struct HandlerDeps<I: IdGenerator, S: LinkStore> {
    pub id_generator: I,
    pub link_store: S,
}

/// Single failure boundary for the whole dispatch: nothing below is allowed
/// to surface an error to the caller beyond a generic 500.
pub(crate) async fn function_handler<I: IdGenerator, S: LinkStore>(
    deps: &HandlerDeps<I, S>,
    event: Request,
) -> Result<impl IntoResponse, Error> {
    tracing::info!("Received event: {:?}", event);

    match route(deps, event).await {
        Ok(response) => Ok(response),
        Err(e) => {
            tracing::error!("Unhandled error processing request: {:?}", e);
            message_response(&StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

async fn route<I: IdGenerator, S: LinkStore>(
    deps: &HandlerDeps<I, S>,
    event: Request,
) -> Result<Response<String>, Error> {
    let path = event.uri().path().to_string();

    if *event.method() == Method::POST && path == "/get-url-shortner" {
        shorten_url(deps, &event).await
    } else if *event.method() == Method::GET && path.starts_with("/short/") {
        redirect(&deps.link_store, &event).await
    } else {
        message_response(&StatusCode::NOT_FOUND, "Route not found")
    }
}

async fn shorten_url<I: IdGenerator, S: LinkStore>(
    deps: &HandlerDeps<I, S>,
    event: &Request,
) -> Result<Response<String>, Error> {
    let request_body = event.payload::<ShortenUrlRequest>()?;
    let url = request_body.and_then(|body| body.url).unwrap_or_default();
    if url.is_empty() {
        return message_response(&StatusCode::BAD_REQUEST, "Missing URL");
    }

    let id = deps.id_generator.generate_id();
    let stored = deps.link_store.store_link(id, url).await?;

    let (domain, stage) = domain_and_stage(event);
    let short_url = format!("https://{}/{}/short/{}", domain, stage, stored.id);

    json_response(&StatusCode::OK, &ShortenUrlResponse { short_url })
}

async fn redirect<S: LinkStore>(
    link_store: &S,
    event: &Request,
) -> Result<Response<String>, Error> {
    let link_id = event
        .path_parameters_ref()
        .and_then(|params| params.first("id"))
        .unwrap_or("");

    if link_id.is_empty() {
        return message_response(&StatusCode::BAD_REQUEST, "Missing ID");
    }

    match link_store.get_url(link_id).await? {
        Some(url) => redirect_response(&url),
        None => message_response(&StatusCode::NOT_FOUND, "URL not found"),
    }
}

fn domain_and_stage(event: &Request) -> (String, String) {
    match event.request_context_ref() {
        Some(RequestContext::ApiGatewayV1(ctx)) => (
            ctx.domain_name.clone().unwrap_or_default(),
            ctx.stage.clone().unwrap_or_default(),
        ),
        Some(RequestContext::ApiGatewayV2(ctx)) => (
            ctx.domain_name.clone().unwrap_or_default(),
            ctx.stage.clone().unwrap_or_default(),
        ),
        _ => (String::new(), String::new()),
    }
}
