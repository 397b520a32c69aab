//! User id coercion.

use super::{User, UserError};
use crate::model::de::value_to_u64;
use serde_json::Value;

/// An id as callers hand it in: already numeric, or text to be parsed.
///
/// Anything that converts into `RawId` can be passed where a user id is
/// expected; the text form is validated when the resource is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawId {
    Int(u64),
    Str(String),
}

macro_rules! from_unsigned {
    ($($int:ty),*) => {$(
        impl From<$int> for RawId {
            fn from(id: $int) -> Self {
                RawId::Int(id as u64)
            }
        }
    )*};
}

// Negative ids keep their text so the error names what was passed.
macro_rules! from_signed {
    ($($int:ty),*) => {$(
        impl From<$int> for RawId {
            fn from(id: $int) -> Self {
                match u64::try_from(id) {
                    Ok(id) => RawId::Int(id),
                    Err(_) => RawId::Str(id.to_string()),
                }
            }
        }
    )*};
}

from_unsigned!(u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);

impl From<&u64> for RawId {
    fn from(id: &u64) -> Self {
        RawId::Int(*id)
    }
}

impl From<&str> for RawId {
    fn from(id: &str) -> Self {
        RawId::Str(id.to_string())
    }
}

impl From<String> for RawId {
    fn from(id: String) -> Self {
        RawId::Str(id)
    }
}

impl From<&String> for RawId {
    fn from(id: &String) -> Self {
        RawId::Str(id.clone())
    }
}

/// Anything that identifies a user by integer id.
pub trait ToUid {
    fn to_uid(&self) -> Result<u64, UserError>;
}

impl ToUid for RawId {
    fn to_uid(&self) -> Result<u64, UserError> {
        match self {
            RawId::Int(id) => Ok(*id),
            RawId::Str(s) => s.to_uid(),
        }
    }
}

impl ToUid for u64 {
    fn to_uid(&self) -> Result<u64, UserError> {
        Ok(*self)
    }
}

impl ToUid for str {
    fn to_uid(&self) -> Result<u64, UserError> {
        self.trim()
            .parse()
            .map_err(|_| UserError::InvalidId(self.to_string()))
    }
}

impl ToUid for String {
    fn to_uid(&self) -> Result<u64, UserError> {
        self.as_str().to_uid()
    }
}

impl ToUid for Value {
    fn to_uid(&self) -> Result<u64, UserError> {
        value_to_u64(self).map_err(UserError::InvalidId)
    }
}

impl ToUid for User {
    fn to_uid(&self) -> Result<u64, UserError> {
        self.id().ok_or(UserError::MissingId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_and_integer_ids_agree() {
        assert_eq!(RawId::from("1234").to_uid(), Ok(1234));
        assert_eq!(RawId::from(1234u64).to_uid(), Ok(1234));
        assert_eq!(json!("1234").to_uid(), Ok(1234));
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        assert_eq!(
            RawId::from("mark").to_uid(),
            Err(UserError::InvalidId("mark".into()))
        );
        assert!(json!(null).to_uid().is_err());
    }

    #[test]
    fn test_any_integer_width_is_an_id() {
        assert_eq!(RawId::from(5), RawId::Int(5));
        assert_eq!(RawId::from(5u8).to_uid(), Ok(5));
        assert_eq!(RawId::from(1_240_077i64).to_uid(), Ok(1_240_077));
        assert_eq!(RawId::from(7usize).to_uid(), Ok(7));
        assert_eq!(
            RawId::from(-1i32).to_uid(),
            Err(UserError::InvalidId("-1".into()))
        );
    }
}
