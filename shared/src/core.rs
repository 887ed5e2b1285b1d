use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

#[cfg(any(test, feature = "mocks"))]
use mockall::automock;

/// A stored mapping from a short identifier to its original URL.
///
/// Records are write-once: there is no update or delete operation and
/// links never expire.
#[derive(Debug, Deserialize, Serialize)]
pub struct ShortLink {
    pub id: String,
    pub url: String,
}

impl ShortLink {
    pub fn new(id: String, url: String) -> Self {
        Self { id, url }
    }
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait LinkStore: Debug {
    async fn get_url(&self, link_id: &str) -> Result<Option<String>, String>;
    async fn store_link(&self, link_id: String, url: String) -> Result<ShortLink, String>;
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

/// Generates 8-character lowercase hex identifiers, taken from the first
/// segment of a hyphenated v4 UUID. Collisions are possible but not
/// mitigated; a later write for the same id overwrites the earlier record.
#[derive(Debug)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        // The hyphenated form is ASCII with the first separator at index 8.
        Uuid::new_v4().to_string()[..8].to_string()
    }
}
