use existence::{AwsConnector, Config, Connector, ExistenceCheck, Response};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let check = ExistenceCheck::new(Config::default(), AwsConnector);
    run(service_fn(|event: LambdaEvent<Value>| handler(&check, event))).await
}

/// The payload is the request itself: `{ "email": "..." }`.
async fn handler<C: Connector>(
    check: &ExistenceCheck<C>,
    event: LambdaEvent<Value>,
) -> Result<Response, Error> {
    log::debug!("handling request {}", event.context.request_id);
    Ok(check.check_value(event.payload).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use existence::{ConfigError, EmailIndex, StoreError};
    use lambda_runtime::Context;
    use serde_json::json;

    #[derive(Clone, Copy)]
    struct Known(&'static [&'static str]);

    impl EmailIndex for Known {
        async fn count_matching(&self, _: &Config, email: &str) -> Result<usize, StoreError> {
            Ok(self.0.iter().filter(|known| **known == email).count())
        }
    }

    impl Connector for Known {
        type Index = Known;

        async fn connect(&self) -> Result<Known, ConfigError> {
            Ok(*self)
        }
    }

    async fn invoke(fixture: &str) -> Value {
        let check = ExistenceCheck::new(Config::default(), Known(&["alice@example.com"]));
        let payload = serde_json::from_str::<Value>(fixture).expect("failed to parse fixture");
        let response = handler(&check, LambdaEvent::new(payload, Context::default()))
            .await
            .expect("handler failed");
        serde_json::to_value(response).expect("failed to serialize response")
    }

    #[tokio::test]
    async fn existing_user_event() {
        assert_eq!(
            invoke(include_str!("../tests/data/existing_user.json")).await,
            json!({ "statusCode": 200, "exists": true, "message": "User exists" })
        );
    }

    #[tokio::test]
    async fn unknown_user_event() {
        assert_eq!(
            invoke(include_str!("../tests/data/unknown_user.json")).await,
            json!({ "statusCode": 200, "exists": false, "message": "User does not exist" })
        );
    }

    #[tokio::test]
    async fn non_object_event() {
        assert_eq!(
            invoke(r#""alice@example.com""#).await,
            json!({ "statusCode": 400, "exists": false, "message": "Invalid request" })
        );
    }
}
