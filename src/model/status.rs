use super::de;
use serde::Deserialize;

/// A user's current status line. Neither attribute is validated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Status {
    #[serde(default, deserialize_with = "de::string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub time: Option<String>,
}

impl Status {
    pub fn new(message: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            time: Some(time.into()),
        }
    }
}
