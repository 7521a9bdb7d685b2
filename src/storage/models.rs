// storage/models.rs
// Database models

/// A stored URL, keyed by a caller-assigned id.
///
/// Maps to the `urls` table. Records are created by `insert_url` and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub address: String,
}
