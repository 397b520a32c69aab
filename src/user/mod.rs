//! The user resource: field storage, remote population and cached relationships.
//!
//! # Lifecycle
//!
//! A [`User`] is built from an id and a session ([`User::new`]), from a raw
//! record ([`User::from_hash`]), or from both ([`User::with_hash`]). Fields stay
//! unset until a record is applied, either at construction or by
//! [`User::populate`].
//!
//! # Caching
//!
//! Relationship accessors (`friends`, `groups`, `notifications`, `albums`, ...)
//! fetch once and keep the result for the lifetime of the instance. There is no
//! invalidation: the first successful fetch wins, and later calls return it
//! even when called with different arguments.

pub mod error;
pub mod fields;
pub mod id;
pub mod value;

pub use error::*;
pub use fields::*;
pub use id::*;
pub use value::*;

use crate::model::{
    Action, Affiliation, Album, EducationInfo, FeedItem, FromHash, Group, HighschoolInfo,
    Location, Notifications, Status, Story, TemplatizedAction, WorkInfo,
};
use crate::params;
use crate::session::{join_list, Method, Params, Session};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A remote user.
///
/// Cloning a user clones its fields and caches; the session handle is shared.
#[derive(Debug, Clone, Default)]
pub struct User {
    id: Option<u64>,
    session: Option<Arc<dyn Session>>,
    attributes: BTreeMap<Field, FieldValue>,
    populated: bool,
    friends: Option<Vec<User>>,
    friends_with_this_app: Option<Vec<User>>,
    groups: Option<Vec<Group>>,
    notifications: Option<Notifications>,
    albums: Option<Vec<Album>>,
    album: Option<Album>,
}

// =============================================================================
// 1. CONSTRUCTION
// =============================================================================

impl User {
    /// Creates an unpopulated user.
    ///
    /// # Errors
    /// [`UserError::InvalidId`] if `id` is text that does not parse as an integer.
    pub fn new(id: impl Into<RawId>, session: Arc<dyn Session>) -> Result<Self, UserError> {
        Ok(Self {
            id: Some(id.into().to_uid()?),
            session: Some(session),
            ..Default::default()
        })
    }

    /// Creates a user and fills every recognized field present in `hash`.
    pub fn with_hash(
        id: impl Into<RawId>,
        session: Arc<dyn Session>,
        hash: &Map<String, Value>,
    ) -> Result<Self, UserError> {
        let mut user = Self::new(id, session)?;
        user.populate_from_hash(hash);
        Ok(user)
    }

    /// Creates a user from a record alone. It has no id or session, so remote
    /// operations on it fail with [`UserError::NoSession`].
    pub fn from_hash(hash: &Map<String, Value>) -> Self {
        let mut user = Self::default();
        user.populate_from_hash(hash);
        user
    }

    /// Applies a record: recognized keys are converted per the schema,
    /// anything else is skipped. A value that does not decode into its
    /// field's record type is stored raw.
    pub fn populate_from_hash(&mut self, hash: &Map<String, Value>) {
        for (key, value) in hash {
            match Field::from_name(key) {
                Some(field) => self.set(field, value.clone()),
                None => debug!(uid = ?self.id, key = %key, "Skipping non-attribute"),
            }
        }
        if !hash.is_empty() {
            self.populated = true;
        }
    }
}

// =============================================================================
// 2. ATTRIBUTE ACCESS
// =============================================================================

impl User {
    /// The user's integer id.
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn session(&self) -> Option<&Arc<dyn Session>> {
        self.session.as_ref()
    }

    pub fn set_session(&mut self, session: Arc<dyn Session>) {
        self.session = Some(session);
    }

    /// Whether a non-empty record has been applied to this user.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Reads a field without any remote call. `None` means unset.
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.attributes.get(&field)
    }

    /// Reads a field stored as a plain value.
    pub fn raw(&self, field: Field) -> Option<&Value> {
        self.get(field).and_then(FieldValue::as_raw)
    }

    /// Reads a field, populating the user from the remote side first if no
    /// record has been applied yet.
    pub async fn load(&mut self, field: Field) -> Result<Option<&FieldValue>, UserError> {
        if !self.populated {
            self.populate().await?;
        }
        Ok(self.attributes.get(&field))
    }

    /// Assigns a raw value, converting it per the field's schema entry.
    pub fn set(&mut self, field: Field, value: Value) {
        let value = FieldValue::convert(field.conversion(), value);
        self.attributes.insert(field, value);
    }

    /// Iterates over the set fields in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.attributes.iter().map(|(field, value)| (*field, value))
    }

    pub fn current_location(&self) -> Option<&Location> {
        match self.get(Field::CurrentLocation) {
            Some(FieldValue::Location(location)) => Some(location),
            _ => None,
        }
    }

    pub fn hometown_location(&self) -> Option<&Location> {
        match self.get(Field::HometownLocation) {
            Some(FieldValue::Location(location)) => Some(location),
            _ => None,
        }
    }

    pub fn hs_info(&self) -> Option<&HighschoolInfo> {
        match self.get(Field::HsInfo) {
            Some(FieldValue::HighschoolInfo(info)) => Some(info),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<&Status> {
        match self.get(Field::Status) {
            Some(FieldValue::Status(status)) => Some(status),
            _ => None,
        }
    }

    pub fn affiliations(&self) -> Option<&[Affiliation]> {
        match self.get(Field::Affiliations) {
            Some(FieldValue::Affiliations(list)) => Some(list),
            _ => None,
        }
    }

    pub fn education_history(&self) -> Option<&[EducationInfo]> {
        match self.get(Field::EducationHistory) {
            Some(FieldValue::EducationHistory(list)) => Some(list),
            _ => None,
        }
    }

    pub fn work_history(&self) -> Option<&[WorkInfo]> {
        match self.get(Field::WorkHistory) {
            Some(FieldValue::WorkHistory(list)) => Some(list),
            _ => None,
        }
    }

    pub fn set_current_location(&mut self, location: HashSettable<Location>) {
        self.set_record(Field::CurrentLocation, location, FieldValue::Location)
    }

    pub fn set_hometown_location(&mut self, location: HashSettable<Location>) {
        self.set_record(Field::HometownLocation, location, FieldValue::Location)
    }

    pub fn set_hs_info(&mut self, info: HashSettable<HighschoolInfo>) {
        self.set_record(Field::HsInfo, info, FieldValue::HighschoolInfo)
    }

    pub fn set_status(&mut self, status: HashSettable<Status>) {
        self.set_record(Field::Status, status, FieldValue::Status)
    }

    pub fn set_affiliations(&mut self, list: Vec<HashSettable<Affiliation>>) -> Result<(), UserError> {
        let list = built_list(list)?;
        self.attributes.insert(Field::Affiliations, FieldValue::Affiliations(list));
        Ok(())
    }

    pub fn set_education_history(&mut self, list: Vec<HashSettable<EducationInfo>>) -> Result<(), UserError> {
        let list = built_list(list)?;
        self.attributes.insert(Field::EducationHistory, FieldValue::EducationHistory(list));
        Ok(())
    }

    pub fn set_work_history(&mut self, list: Vec<HashSettable<WorkInfo>>) -> Result<(), UserError> {
        let list = built_list(list)?;
        self.attributes.insert(Field::WorkHistory, FieldValue::WorkHistory(list));
        Ok(())
    }

    fn set_record<T: FromHash>(
        &mut self,
        field: Field,
        input: HashSettable<T>,
        wrap: fn(T) -> FieldValue,
    ) {
        match input {
            // Raw input goes through the schema so non-mapping values stay raw.
            HashSettable::Raw(raw) => self.set(field, raw),
            HashSettable::Built(built) => {
                self.attributes.insert(field, wrap(built));
            }
        }
    }
}

fn built_list<T: FromHash>(list: Vec<HashSettable<T>>) -> Result<Vec<T>, UserError> {
    list.into_iter()
        .map(|item| item.into_built().map_err(UserError::from))
        .collect()
}

// =============================================================================
// 3. REMOTE POPULATION
// =============================================================================

impl User {
    /// Fetches every schema field for this user and applies the returned record.
    #[instrument(skip(self), fields(uid = ?self.id))]
    pub async fn populate(&mut self) -> Result<(), UserError> {
        let id = self.require_id()?;
        let params = params! {
            "fields" => Field::join(&[]),
            "uids" => id,
        };
        let records = self.call_list(Method::UsersGetInfo, params).await?;
        let record = records
            .first()
            .and_then(Value::as_object)
            .ok_or_else(|| UserError::UnexpectedResponse {
                method: Method::UsersGetInfo,
                reason: "no user record returned".into(),
            })?;
        self.populate_from_hash(record);
        info!(fields = self.attributes.len(), "Populated");
        Ok(())
    }
}

// =============================================================================
// 4. RELATIONSHIPS
// =============================================================================

impl User {
    /// Seeds the friends list. Ignored once a list is cached.
    pub fn set_friends(&mut self, friends: Vec<User>) {
        if self.friends.is_none() {
            self.friends = Some(friends);
        } else {
            debug!(uid = ?self.id, "Friends already cached, ignoring");
        }
    }

    /// The user's friends as unpopulated users. Fetched once, then cached.
    #[instrument(skip(self), fields(uid = ?self.id))]
    pub async fn friends(&mut self) -> Result<&[User], UserError> {
        let friends = match self.friends.take() {
            Some(cached) => {
                debug!(count = cached.len(), "Cache hit");
                cached
            }
            None => self.fetch_users(Method::FriendsGet).await?,
        };
        Ok(self.friends.insert(friends).as_slice())
    }

    /// The user's friends, each populated with `fields` (every field when
    /// empty) in one batched call.
    ///
    /// Shares the friends cache: if friends were already fetched, the cached
    /// list is returned as is, whatever `fields` asks for.
    #[instrument(skip(self), fields(uid = ?self.id))]
    pub async fn friends_with_info(&mut self, fields: &[Field]) -> Result<&[User], UserError> {
        let friends = match self.friends.take() {
            Some(cached) => {
                debug!(count = cached.len(), "Cache hit");
                cached
            }
            None => {
                let session = self.require_session()?;
                let uids = self.fetch_uids(Method::FriendsGet).await?;
                let params = params! {
                    "fields" => Field::join(fields),
                    "uids" => join_list(&uids),
                };
                let records = self.call_list(Method::UsersGetInfo, params).await?;
                records
                    .iter()
                    .map(|record| {
                        let hash = record.as_object().ok_or_else(|| UserError::UnexpectedResponse {
                            method: Method::UsersGetInfo,
                            reason: format!("expected a user record, got {record}"),
                        })?;
                        match hash.get("uid").filter(|uid| !uid.is_null()) {
                            Some(uid) => User::with_hash(uid.to_uid()?, session.clone(), hash),
                            None => {
                                warn!(record = %record, "Friend record without uid");
                                let mut friend = User::from_hash(hash);
                                friend.set_session(session.clone());
                                Ok(friend)
                            }
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(self.friends.insert(friends).as_slice())
    }

    /// Whether `other` is among this user's friends, fetching friends if needed.
    pub async fn is_friends_with<T: ToUid + ?Sized>(&mut self, other: &T) -> Result<bool, UserError> {
        let uid = other.to_uid()?;
        let friends = self.friends().await?;
        Ok(friends.iter().any(|friend| friend.id == Some(uid)))
    }

    /// Friends who have added the calling application. Fetched once, then cached.
    #[instrument(skip(self), fields(uid = ?self.id))]
    pub async fn friends_with_this_app(&mut self) -> Result<&[User], UserError> {
        let friends = match self.friends_with_this_app.take() {
            Some(cached) => cached,
            None => self.fetch_users(Method::FriendsGetAppUsers).await?,
        };
        Ok(self.friends_with_this_app.insert(friends).as_slice())
    }

    /// The user's groups, limited to `gids` when non-empty.
    ///
    /// The first result is cached; later calls return it regardless of `gids`.
    #[instrument(skip(self), fields(uid = ?self.id))]
    pub async fn groups(&mut self, gids: &[u64]) -> Result<&[Group], UserError> {
        let groups = match self.groups.take() {
            Some(cached) => {
                debug!(count = cached.len(), "Cache hit");
                cached
            }
            None => {
                let session = self.require_session()?;
                let params = if gids.is_empty() {
                    Params::new()
                } else {
                    params! { "gids" => join_list(gids) }
                };
                self.call_list(Method::GroupsGet, params)
                    .await?
                    .iter()
                    .map(|record| {
                        let mut group = Group::from_hash(record)?;
                        group.session = Some(session.clone());
                        Ok(group)
                    })
                    .collect::<Result<Vec<_>, UserError>>()?
            }
        };
        Ok(self.groups.insert(groups).as_slice())
    }

    /// Outstanding notifications. Fetched once, then cached.
    #[instrument(skip(self), fields(uid = ?self.id))]
    pub async fn notifications(&mut self) -> Result<&Notifications, UserError> {
        let notifications = match self.notifications.take() {
            Some(cached) => cached,
            None => {
                let response = self
                    .require_session()?
                    .post(Method::NotificationsGet, Params::new())
                    .await?;
                Notifications::from_hash(&response)?
            }
        };
        Ok(self.notifications.insert(notifications))
    }

    /// The user's photo albums. Fetched once, then cached.
    #[instrument(skip(self), fields(uid = ?self.id))]
    pub async fn albums(&mut self) -> Result<&[Album], UserError> {
        let albums = match self.albums.take() {
            Some(cached) => cached,
            None => {
                let params = params! { "uid" => self.require_id()? };
                self.call_list(Method::PhotosGetAlbums, params)
                    .await?
                    .iter()
                    .map(|record| Album::from_hash(record).map_err(UserError::from))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(self.albums.insert(albums).as_slice())
    }

    /// Creates an album and remembers it as the last created album.
    ///
    /// The new album is not added to the cached [`User::albums`] list.
    #[instrument(skip(self, params), fields(uid = ?self.id))]
    pub async fn create_album(&mut self, params: Params) -> Result<&Album, UserError> {
        let response = self
            .require_session()?
            .post(Method::PhotosCreateAlbum, params)
            .await?;
        let album = Album::from_hash(&response)?;
        info!(aid = ?album.aid, "Album created");
        Ok(self.album.insert(album))
    }

    /// The album returned by the most recent [`User::create_album`].
    pub fn last_created_album(&self) -> Option<&Album> {
        self.album.as_ref()
    }

    /// Reads the profile markup. Not cached.
    #[instrument(skip(self), fields(uid = ?self.id))]
    pub async fn profile_fbml(&self) -> Result<Value, UserError> {
        let params = params! { "uid" => self.require_id()? };
        Ok(self
            .require_session()?
            .post(Method::ProfileGetFbml, params)
            .await?)
    }

    /// Writes the profile markup and returns the raw response.
    #[instrument(skip(self, markup), fields(uid = ?self.id))]
    pub async fn set_profile_fbml(&self, markup: impl Into<String>) -> Result<Value, UserError> {
        let markup: String = markup.into();
        let params = params! {
            "uid" => self.require_id()?,
            "markup" => markup,
        };
        Ok(self
            .require_session()?
            .post(Method::ProfileSetFbml, params)
            .await?)
    }

    pub async fn publish_story(&self, story: Story) -> Result<bool, UserError> {
        self.publish(FeedItem::Story(story)).await
    }

    pub async fn publish_action(&self, action: Action) -> Result<bool, UserError> {
        self.publish(FeedItem::Action(action)).await
    }

    pub async fn publish_templatized_action(&self, action: TemplatizedAction) -> Result<bool, UserError> {
        self.publish(FeedItem::TemplatizedAction(action)).await
    }

    /// Sends a feed payload; `true` only when the remote side answers `"1"`.
    #[instrument(skip(self, item), fields(uid = ?self.id, method = %item.method()))]
    async fn publish(&self, item: FeedItem) -> Result<bool, UserError> {
        let response = self
            .require_session()?
            .post(item.method(), item.to_params())
            .await?;
        let published = response.as_str() == Some("1");
        if !published {
            warn!(%response, "Publish not acknowledged");
        }
        Ok(published)
    }
}

// =============================================================================
// 5. CALL HELPERS
// =============================================================================

impl User {
    fn require_session(&self) -> Result<Arc<dyn Session>, UserError> {
        self.session.clone().ok_or(UserError::NoSession)
    }

    fn require_id(&self) -> Result<u64, UserError> {
        self.id.ok_or(UserError::MissingId)
    }

    /// Issues a call whose response must be a list.
    async fn call_list(&self, method: Method, params: Params) -> Result<Vec<Value>, UserError> {
        match self.require_session()?.post(method, params).await? {
            Value::Array(items) => Ok(items),
            other => Err(UserError::UnexpectedResponse {
                method,
                reason: format!("expected a list, got {other}"),
            }),
        }
    }

    async fn fetch_uids(&self, method: Method) -> Result<Vec<u64>, UserError> {
        self.call_list(method, Params::new())
            .await?
            .iter()
            .map(ToUid::to_uid)
            .collect()
    }

    /// Fetches a uid list and wraps each uid in an unpopulated user.
    async fn fetch_users(&self, method: Method) -> Result<Vec<User>, UserError> {
        let session = self.require_session()?;
        let uids = self.fetch_uids(method).await?;
        info!(%method, count = uids.len(), "Fetched");
        uids.into_iter()
            .map(|uid| User::new(uid, session.clone()))
            .collect()
    }
}
