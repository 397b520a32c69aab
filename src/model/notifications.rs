use super::de;
use serde::Deserialize;

/// Unread counter for one notification channel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NotificationCount {
    #[serde(default, deserialize_with = "de::uint")]
    pub unread: Option<u64>,
    /// Id of the most recent item on this channel.
    #[serde(default, deserialize_with = "de::uint")]
    pub most_recent: Option<u64>,
}

/// Snapshot of the user's outstanding notifications.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Notifications {
    #[serde(default, deserialize_with = "de::object")]
    pub messages: Option<NotificationCount>,
    #[serde(default, deserialize_with = "de::object")]
    pub pokes: Option<NotificationCount>,
    #[serde(default, deserialize_with = "de::object")]
    pub shares: Option<NotificationCount>,
    /// Uids with pending friend requests.
    #[serde(default, deserialize_with = "de::uint_list")]
    pub friend_requests: Vec<u64>,
    #[serde(default, deserialize_with = "de::uint_list")]
    pub group_invites: Vec<u64>,
    #[serde(default, deserialize_with = "de::uint_list")]
    pub event_invites: Vec<u64>,
}
