use lambda_http::http::StatusCode;
use lambda_http::{Error, Response};
use serde::Serialize;
use serde_json::json;

pub fn redirect_response(location: &str) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header("Location", location)
        .body("".to_string())
        .map_err(Box::new)?;

    Ok(response)
}

pub fn message_response(status: &StatusCode, message: &str) -> Result<Response<String>, Error> {
    json_response(status, &json!({ "message": message }))
}

pub fn json_response(
    status: &StatusCode,
    body: &impl Serialize,
) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&body).unwrap())
        .map_err(Box::new)?;

    Ok(response)
}
