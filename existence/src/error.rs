use thiserror::Error;

/// The payload could not be turned into a [`Request`](crate::Request).
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload must be a JSON object")]
    NotAnObject,

    #[error("payload body is not valid base64: {0}")]
    Base64(String),
}

/// The store client could not be set up for this invocation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no AWS region configured")]
    MissingRegion,
}

/// The indexed query itself failed.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(String),
}
