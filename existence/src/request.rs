use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::DecodeError;

/// The decoded invocation payload.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Missing or `null` decodes to the empty string, which is then looked
    /// up like any other value. `Email` is accepted as well.
    #[serde(default, alias = "Email", deserialize_with = "null_as_empty")]
    pub email: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Request {
    /// Decodes raw payload bytes. Anything other than a JSON object fails.
    pub fn from_slice(payload: &[u8]) -> Result<Self, DecodeError> {
        let object = serde_json::from_slice::<Map<String, Value>>(payload)?;
        Ok(serde_json::from_value(Value::Object(object))?)
    }

    /// Decodes a payload the runtime has already parsed as JSON.
    pub fn from_value(payload: Value) -> Result<Self, DecodeError> {
        match payload {
            Value::Object(_) => Ok(serde_json::from_value(payload)?),
            _ => Err(DecodeError::NotAnObject),
        }
    }
}
