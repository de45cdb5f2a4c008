use chrono::{DateTime, Utc};
use serde::Serialize;

/// A personal text note addressed by its unique slug.
///
/// The slug is URL-safe ASCII and unique across all notes regardless of
/// author; it is either supplied on the form or derived from the title.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub slug: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
