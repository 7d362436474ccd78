use std::future::Future;

use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};

use crate::{Config, ConfigError, StoreError};

/// A table index that can be asked how many items carry a given email.
pub trait EmailIndex {
    /// Runs one query and returns the item count of its first page only.
    fn count_matching(
        &self,
        config: &Config,
        email: &str,
    ) -> impl Future<Output = Result<usize, StoreError>>;
}

impl<T: EmailIndex> EmailIndex for &T {
    async fn count_matching(&self, config: &Config, email: &str) -> Result<usize, StoreError> {
        (**self).count_matching(config, email).await
    }
}

/// Builds an [`EmailIndex`] for a single invocation.
pub trait Connector {
    type Index: EmailIndex;

    fn connect(&self) -> impl Future<Output = Result<Self::Index, ConfigError>>;
}

/// DynamoDB-backed [`EmailIndex`].
#[derive(Clone, Debug)]
pub struct DynamoIndex {
    client: Client,
}

impl DynamoIndex {
    pub fn new(client: Client) -> Self {
        DynamoIndex { client }
    }
}

impl EmailIndex for DynamoIndex {
    async fn count_matching(&self, config: &Config, email: &str) -> Result<usize, StoreError> {
        let output = self
            .client
            .query()
            .table_name(&config.table_name)
            .index_name(&config.index_name)
            .key_condition_expression(config.key_condition())
            .expression_attribute_values(":email", AttributeValue::S(email.to_owned()))
            .send()
            .await
            .map_err(|err| StoreError::Query(DisplayErrorContext(&err).to_string()))?;
        Ok(output.items().len())
    }
}

/// Resolves region and credentials from the default AWS provider chain on
/// every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct AwsConnector;

impl AwsConnector {
    /// Builds the index client from an already loaded SDK config. The
    /// credentials chain is resolved lazily, on the first query.
    pub fn index_from(sdk_config: &SdkConfig) -> Result<DynamoIndex, ConfigError> {
        if sdk_config.region().is_none() {
            return Err(ConfigError::MissingRegion);
        }
        Ok(DynamoIndex::new(Client::new(sdk_config)))
    }
}

impl Connector for AwsConnector {
    type Index = DynamoIndex;

    async fn connect(&self) -> Result<DynamoIndex, ConfigError> {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        AwsConnector::index_from(&sdk_config)
    }
}
