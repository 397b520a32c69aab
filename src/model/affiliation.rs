use super::de;
use serde::Deserialize;

/// A network the user belongs to (college, workplace, region).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Affiliation {
    #[serde(rename = "type", default, deserialize_with = "de::string")]
    pub affiliation_type: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub year: Option<String>,
    /// Network id.
    #[serde(default, deserialize_with = "de::uint")]
    pub nid: Option<u64>,
}
