//! Identifier newtypes shared across the crate.
//!
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Schedule entry identifier (store primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntryId(pub i64);

/// Owning user identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Academic semester identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SemesterId(pub i64);

impl EntryId {
    pub fn new(value: i64) -> Self {
        EntryId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl SemesterId {
    pub fn new(value: i64) -> Self {
        SemesterId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for SemesterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EntryId> for i64 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}
impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}
impl From<SemesterId> for i64 {
    fn from(id: SemesterId) -> Self {
        id.0
    }
}
