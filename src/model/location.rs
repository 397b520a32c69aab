use super::de;
use serde::Deserialize;

/// A place attached to a profile (current city, hometown, work site, group venue).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "de::string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub zip: Option<String>,
}
