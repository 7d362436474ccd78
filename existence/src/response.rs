use serde::Serialize;

use crate::{ConfigError, DecodeError, Lookup};

pub const USER_EXISTS: &str = "User exists";
pub const USER_DOES_NOT_EXIST: &str = "User does not exist";
pub const INVALID_REQUEST: &str = "Invalid request";
pub const SERVER_ERROR: &str = "Server error";

/// How an invocation ended, before it is shaped into a [`Response`].
#[derive(Debug)]
pub enum Outcome {
    Invalid(DecodeError),
    Unavailable(ConfigError),
    Checked(Lookup),
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Response {
    fn new(status_code: u16, exists: bool, message: &str) -> Self {
        Response {
            status_code,
            exists,
            message: Some(message.to_owned()),
        }
    }
}

impl From<Outcome> for Response {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Invalid(_) => Response::new(400, false, INVALID_REQUEST),
            Outcome::Unavailable(_) => Response::new(500, false, SERVER_ERROR),
            Outcome::Checked(Lookup::Found) => Response::new(200, true, USER_EXISTS),
            Outcome::Checked(Lookup::NotFound) => Response::new(200, false, USER_DOES_NOT_EXIST),
            // A failed lookup is reported exactly like a miss. Callers cannot
            // tell the two apart; the failure is only visible in the logs.
            Outcome::Checked(Lookup::Failed(_)) => Response::new(200, false, USER_DOES_NOT_EXIST),
        }
    }
}
