use super::{de, Location};
use crate::session::Session;
use serde::Deserialize;
use std::sync::Arc;

/// A group the user is a member of.
///
/// Groups are built from the records returned by the groups call; the owning
/// user attaches its session afterwards so the group can issue its own calls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Group {
    #[serde(default, deserialize_with = "de::uint")]
    pub gid: Option<u64>,
    #[serde(default, deserialize_with = "de::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::uint")]
    pub nid: Option<u64>,
    #[serde(default, deserialize_with = "de::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub group_type: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub group_subtype: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub recent_news: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub pic: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub pic_big: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub pic_small: Option<String>,
    #[serde(default, deserialize_with = "de::uint")]
    pub creator: Option<u64>,
    #[serde(default, deserialize_with = "de::string")]
    pub update_time: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub office: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "de::object")]
    pub venue: Option<Location>,
    #[serde(default, deserialize_with = "de::string")]
    pub privacy: Option<String>,
    #[serde(skip)]
    pub session: Option<Arc<dyn Session>>,
}
