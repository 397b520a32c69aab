use super::{de, Location};
use serde::Deserialize;

/// One entry of a user's work history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkInfo {
    /// Nested location record; a blank value from the remote side reads as unset.
    #[serde(default, deserialize_with = "de::object")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "de::string")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub end_date: Option<String>,
}
