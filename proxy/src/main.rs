use aws_lambda_events::{
    apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse},
    encodings::Body,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use existence::{AwsConnector, Config, Connector, DecodeError, ExistenceCheck, Request, Response};
use http::{header::CONTENT_TYPE, HeaderMap, HeaderValue};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let check = ExistenceCheck::new(Config::default(), AwsConnector);
    run(service_fn(|event: LambdaEvent<Value>| handler(&check, event))).await
}

/// Raw request bytes carried in the proxy event body.
fn payload(event: ApiGatewayProxyRequest) -> Result<Vec<u8>, DecodeError> {
    let body = event.body.unwrap_or_default();
    if event.is_base64_encoded {
        STANDARD
            .decode(body)
            .map_err(|err| DecodeError::Base64(err.to_string()))
    } else {
        Ok(body.into_bytes())
    }
}

/// Only `exists` goes into the body; the status code carries errors.
fn proxy_response(response: Response) -> ApiGatewayProxyResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    ApiGatewayProxyResponse {
        status_code: i64::from(response.status_code),
        headers,
        body: Some(Body::Text(
            json!({ "exists": response.exists }).to_string(),
        )),
        ..ApiGatewayProxyResponse::default()
    }
}

async fn handler<C: Connector>(
    check: &ExistenceCheck<C>,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayProxyResponse, Error> {
    log::debug!("handling request {}", event.context.request_id);
    let request = serde_json::from_value::<ApiGatewayProxyRequest>(event.payload)
        .map_err(DecodeError::from)
        .and_then(payload)
        .and_then(|payload| Request::from_slice(&payload));
    let response = Response::from(check.check(request).await);
    Ok(proxy_response(response))
}
