//! Pure data structures (DTOs) built from remote records.
//!
//! Every type here implements [`FromHash`], the single conversion used when a
//! raw mapping is assigned to a hash-settable field or returned by a remote call.

pub mod de;

pub mod affiliation;
pub mod album;
pub mod education;
pub mod feed;
pub mod group;
pub mod location;
pub mod notifications;
pub mod status;
pub mod work_info;

pub use affiliation::*;
pub use album::*;
pub use education::*;
pub use feed::*;
pub use group::*;
pub use location::*;
pub use notifications::*;
pub use status::*;
pub use work_info::*;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Conversion from a raw remote mapping into a typed record.
///
/// Keys the record does not declare are ignored.
pub trait FromHash: DeserializeOwned {
    fn from_hash(hash: &Value) -> Result<Self, serde_json::Error> {
        <Self as Deserialize>::deserialize(hash)
    }
}

impl FromHash for Location {}
impl FromHash for EducationInfo {}
impl FromHash for HighschoolInfo {}
impl FromHash for WorkInfo {}
impl FromHash for Affiliation {}
impl FromHash for Status {}
impl FromHash for Group {}
impl FromHash for Album {}
impl FromHash for Notifications {}
