#![cfg_attr(test, deny(warnings))]

//! # ctree-boundary
//!
//! Serializable, anemic data structures for exchanging commentree
//! snapshots in a type-safe manner.
//!
//! The views are meant for serialization and testing, not as a stable
//! wire format.

use serde::{Deserialize, Serialize};

mod conv;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorData {
    Registered {
        user_id: u64,
    },
    Anonymous {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        website: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
}

/// Flat key/value view of a single comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentData {
    pub id: String,
    pub owner_type: String,
    pub owner_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub author: AuthorData,
    pub body: String,
    /// Lowercase markup name, e.g. `"plaintext"`.
    pub markup: String,
    pub is_public: bool,
    pub is_approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Unix epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<i64>,
}
