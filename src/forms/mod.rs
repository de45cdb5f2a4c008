//! Note form validation.
//!
//! Mirrors what the add/edit pages submit: a title, the note text, and an
//! optional slug. `clean` normalizes the input, derives a slug from the
//! title when none was given, and rejects slugs already in use.

pub mod translit;

use serde::Deserialize;

use crate::db::Database;

/// Appended to the offending slug in the duplicate-slug field error.
pub const WARNING: &str = " - that slug is already in use, please pick a unique value!";

/// Slug column limit; derived slugs are truncated to fit.
pub const MAX_SLUG_LEN: usize = 100;

/// Raw form body from the add/edit pages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub slug: String,
}

/// Per-field validation errors, rendered next to their inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub text: Option<String>,
    pub slug: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none() && self.slug.is_none()
    }
}

/// Validated form data, ready for persistence.
#[derive(Debug, Clone)]
pub struct CleanedNote {
    pub title: String,
    pub text: String,
    pub slug: String,
}

impl NoteForm {
    /// Validate the submission. `exclude_id` is the id of the note being
    /// edited, so keeping its own slug does not count as a collision.
    ///
    /// The outer `Result` is a database failure; the inner one carries
    /// field errors back to the form page.
    pub fn clean(
        &self,
        db: &Database,
        exclude_id: Option<i64>,
    ) -> rusqlite::Result<Result<CleanedNote, FormErrors>> {
        let mut errors = FormErrors::default();

        let title = self.title.trim().to_string();
        if title.is_empty() {
            errors.title = Some("This field is required.".to_string());
        }

        let text = self.text.trim().to_string();
        if text.is_empty() {
            errors.text = Some("This field is required.".to_string());
        }

        let slug = if self.slug.trim().is_empty() {
            let mut derived = translit::slugify(&title);
            derived.truncate(MAX_SLUG_LEN);
            derived
        } else {
            self.slug.trim().to_string()
        };

        // Empty slugs (a title with nothing sluggable) still go through the
        // uniqueness check, so a second one fails here instead of on the
        // UNIQUE constraint at insert time.
        if db.slug_exists(&slug, exclude_id)? {
            errors.slug = Some(format!("{}{}", slug, WARNING));
        }

        if errors.is_empty() {
            Ok(Ok(CleanedNote { title, text, slug }))
        } else {
            Ok(Err(errors))
        }
    }
}
