//! Typed field values and hash-settable input.

use super::fields::Conversion;
use crate::model::{Affiliation, EducationInfo, FromHash, HighschoolInfo, Location, Status, WorkInfo};
use serde_json::Value;

/// The stored value of one user field.
///
/// Hash-settable fields hold their typed record. A value whose shape does not
/// fit the field's conversion (an empty string where a location is expected,
/// say) is kept as [`FieldValue::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Raw(Value),
    Location(Location),
    HighschoolInfo(HighschoolInfo),
    Status(Status),
    Affiliations(Vec<Affiliation>),
    EducationHistory(Vec<EducationInfo>),
    WorkHistory(Vec<WorkInfo>),
}

impl FieldValue {
    /// Converts a raw remote value according to `conversion`.
    ///
    /// Falls back to [`FieldValue::Raw`] when the value does not decode into
    /// the field's record type, so one odd attribute never rejects a record.
    pub fn convert(conversion: Conversion, raw: Value) -> Self {
        if !fits(conversion, &raw) {
            return FieldValue::Raw(raw);
        }
        let typed = match conversion {
            Conversion::Raw => return FieldValue::Raw(raw),
            Conversion::Location => Location::from_hash(&raw).map(FieldValue::Location),
            Conversion::HighschoolInfo => {
                HighschoolInfo::from_hash(&raw).map(FieldValue::HighschoolInfo)
            }
            Conversion::Status => Status::from_hash(&raw).map(FieldValue::Status),
            Conversion::AffiliationList => list(&raw).map(FieldValue::Affiliations),
            Conversion::EducationList => list(&raw).map(FieldValue::EducationHistory),
            Conversion::WorkList => list(&raw).map(FieldValue::WorkHistory),
        };
        typed.unwrap_or(FieldValue::Raw(raw))
    }

    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            FieldValue::Raw(value) => Some(value),
            _ => None,
        }
    }
}

fn fits(conversion: Conversion, raw: &Value) -> bool {
    match conversion {
        Conversion::Raw => true,
        Conversion::Location | Conversion::HighschoolInfo | Conversion::Status => raw.is_object(),
        Conversion::AffiliationList | Conversion::EducationList | Conversion::WorkList => raw
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_object)),
    }
}

fn list<T: FromHash>(raw: &Value) -> Result<Vec<T>, serde_json::Error> {
    raw.as_array()
        .map(|items| items.iter().map(T::from_hash).collect())
        .unwrap_or_else(|| Ok(Vec::new()))
}

/// Input to a hash-settable setter: a raw mapping, or a record built by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum HashSettable<T> {
    Raw(Value),
    Built(T),
}

impl<T: FromHash> HashSettable<T> {
    /// Resolves to the typed record, converting a raw mapping if needed.
    pub fn into_built(self) -> Result<T, serde_json::Error> {
        match self {
            HashSettable::Raw(raw) => T::from_hash(&raw),
            HashSettable::Built(built) => Ok(built),
        }
    }
}
