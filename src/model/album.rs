use super::de;
use serde::Deserialize;

/// A photo album.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Album {
    #[serde(default, deserialize_with = "de::uint")]
    pub aid: Option<u64>,
    #[serde(default, deserialize_with = "de::uint")]
    pub cover_pid: Option<u64>,
    #[serde(default, deserialize_with = "de::uint")]
    pub owner: Option<u64>,
    #[serde(default, deserialize_with = "de::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub created: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub modified: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "de::uint")]
    pub size: Option<u64>,
}
