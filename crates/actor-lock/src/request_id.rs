//! Invocation chain identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::{LockError, LockResult};

/// Identifier shared by every call in one invocation chain.
///
/// Never empty, so "no holder" is always `None` and can't collide with an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RequestId(String);

impl RequestId {
    /// Wrap an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::EmptyRequestId`] if `value` is empty.
    pub fn new(value: impl Into<String>) -> LockResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(LockError::EmptyRequestId);
        }
        Ok(Self(value))
    }

    /// Create a fresh id for a new top-level chain.
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RequestId {
    type Err = LockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RequestId {
    type Error = LockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for RequestId {
    type Error = LockError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RequestId> for String {
    fn from(id: RequestId) -> Self {
        id.0
    }
}

impl AsRef<str> for RequestId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn test_empty_request_id_is_rejected() {
        assert_eq!(RequestId::new(""), Err(LockError::EmptyRequestId));
        assert_eq!("".parse::<RequestId>(), Err(LockError::EmptyRequestId));
        assert!(RequestId::try_from(String::new()).is_err());
    }

    #[test]
    fn test_request_id_round_trips_through_display() {
        let id = RequestId::new("req-42").unwrap();
        assert_eq!(id.to_string(), "req-42");
        assert_eq!(id.as_str(), "req-42");

        let parsed: RequestId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let first = RequestId::generate();
        let second = RequestId::generate();
        assert_ne!(first, second);
        assert_eq!(first.as_str().len(), 26);
    }

    #[test]
    fn test_deserialize_rejects_empty_id() {
        let ok: RequestId = serde_json::from_str("\"chain-7\"").unwrap();
        assert_eq!(ok.as_str(), "chain-7");

        let empty: Result<RequestId, _> = serde_json::from_str("\"\"");
        assert!(empty.is_err());
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let id = RequestId::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
