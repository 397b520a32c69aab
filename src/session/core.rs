//! # Session Seam
//!
//! This module defines the contract between resources and the remote API.
//!
//! ## Key Types
//!
//! - [`Session`]: The trait every transport must implement.
//! - [`Method`]: The closed set of remote method names this layer invokes.
//! - [`Params`]: The request parameter mapping.
//! - [`SessionError`]: Transport and remote-side failures.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt::{self, Debug, Display};

/// Request parameters sent alongside a [`Method`].
pub type Params = Map<String, Value>;

// =============================================================================
// 1. THE REMOTE METHODS
// =============================================================================

/// Remote methods invoked by the resource layer.
///
/// # Architecture Note
/// Resources never build method names from strings at runtime. Every call site
/// picks a variant, and [`Method::as_str`] is the only place the wire name lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    FriendsGet,
    FriendsGetAppUsers,
    UsersGetInfo,
    GroupsGet,
    NotificationsGet,
    PhotosGetAlbums,
    PhotosCreateAlbum,
    ProfileGetFbml,
    ProfileSetFbml,
    FeedPublishStoryToUser,
    FeedPublishActionOfUser,
    FeedPublishTemplatizedAction,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::FriendsGet => "facebook.friends.get",
            Method::FriendsGetAppUsers => "facebook.friends.getAppUsers",
            Method::UsersGetInfo => "facebook.users.getInfo",
            Method::GroupsGet => "facebook.groups.get",
            Method::NotificationsGet => "facebook.notifications.get",
            Method::PhotosGetAlbums => "facebook.photos.getAlbums",
            Method::PhotosCreateAlbum => "facebook.photos.createAlbum",
            Method::ProfileGetFbml => "facebook.profile.getFBML",
            Method::ProfileSetFbml => "facebook.profile.setFBML",
            Method::FeedPublishStoryToUser => "facebook.feed.publishStoryToUser",
            Method::FeedPublishActionOfUser => "facebook.feed.publishActionOfUser",
            Method::FeedPublishTemplatizedAction => "facebook.feed.publishTemplatizedAction",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// 2. ERRORS
// =============================================================================

/// Errors raised by a [`Session`] implementation.
///
/// The resource layer never catches or rewrites these; they reach the caller
/// wrapped in [`UserError::Session`](crate::user::UserError::Session).
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum SessionError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Remote error {code}: {message}")]
    Remote { code: i64, message: String },
}

// =============================================================================
// 3. THE TRANSPORT CONTRACT
// =============================================================================

/// Opaque transport and authentication handle.
///
/// Resources hold an `Arc<dyn Session>` and never own the transport. The call
/// returns either a single record or a sequence, depending on the method.
#[async_trait]
pub trait Session: Send + Sync + Debug {
    /// Issue one remote call and wait for its decoded response.
    async fn post(&self, method: Method, params: Params) -> Result<Value, SessionError>;
}

/// Builds a [`Params`] mapping from `key => value` pairs.
///
/// ```rust
/// use social_graph::params;
///
/// let p = params! { "uid" => 42, "markup" => "<b>hi</b>" };
/// assert_eq!(p["uid"], 42);
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::session::Params::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::session::Params::new();
        $( params.insert(($key).to_string(), ::serde_json::Value::from($value)); )+
        params
    }};
}

/// Joins list-valued params the way the remote API expects them (comma separated).
pub fn join_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
