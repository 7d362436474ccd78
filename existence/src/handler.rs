use serde_json::Value;

use crate::{probe, Config, Connector, DecodeError, Outcome, Request, Response};

/// Decode, connect, probe, encode. One instance serves every invocation of a
/// function; nothing is kept between calls.
#[derive(Debug, Clone)]
pub struct ExistenceCheck<C> {
    config: Config,
    connector: C,
}

impl<C: Connector> ExistenceCheck<C> {
    pub fn new(config: Config, connector: C) -> Self {
        ExistenceCheck { config, connector }
    }

    /// Runs the check for an already decoded (or failed) request. A decode
    /// failure never reaches the store.
    pub async fn check(&self, request: Result<Request, DecodeError>) -> Outcome {
        let request = match request {
            Ok(request) => request,
            Err(err) => {
                log::warn!("rejecting request: {}", err);
                return Outcome::Invalid(err);
            }
        };
        let index = match self.connector.connect().await {
            Ok(index) => index,
            Err(err) => {
                log::error!("failed to set up store client: {}", err);
                return Outcome::Unavailable(err);
            }
        };
        Outcome::Checked(probe(&index, &self.config, &request.email).await)
    }

    pub async fn check_slice(&self, payload: &[u8]) -> Response {
        self.check(Request::from_slice(payload)).await.into()
    }

    pub async fn check_value(&self, payload: Value) -> Response {
        self.check(Request::from_value(payload)).await.into()
    }
}
