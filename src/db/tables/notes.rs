//! Note table operations

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Result as SqliteResult, Row};

use super::super::Database;
use crate::models::Note;

fn note_from_row(row: &Row) -> rusqlite::Result<Note> {
    let created_at_str: String = row.get(5)?;
    let updated_at_str: String = row.get(6)?;

    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        text: row.get(2)?,
        slug: row.get(3)?,
        author_id: row.get(4)?,
        created_at: chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .unwrap()
            .with_timezone(&Utc),
        updated_at: chrono::DateTime::parse_from_rfc3339(&updated_at_str)
            .unwrap()
            .with_timezone(&Utc),
    })
}

const NOTE_COLUMNS: &str = "id, title, text, slug, author_id, created_at, updated_at";

impl Database {
    /// Insert a new note owned by `author_id`.
    pub fn create_note(
        &self,
        title: &str,
        text: &str,
        slug: &str,
        author_id: i64,
    ) -> SqliteResult<Note> {
        let conn = self.conn.lock().unwrap();
        let now = Utc::now();
        let now_str = now.to_rfc3339();

        conn.execute(
            "INSERT INTO notes (title, text, slug, author_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            params![title, text, slug, author_id, &now_str],
        )?;

        let id = conn.last_insert_rowid();

        Ok(Note {
            id,
            title: title.to_string(),
            text: text.to_string(),
            slug: slug.to_string(),
            author_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Look up a note by its slug
    pub fn get_note_by_slug(&self, slug: &str) -> SqliteResult<Option<Note>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM notes WHERE slug = ?1",
            NOTE_COLUMNS
        ))?;
        stmt.query_row([slug], note_from_row).optional()
    }

    /// All notes belonging to one author, newest first
    pub fn list_notes_by_author(&self, author_id: i64) -> SqliteResult<Vec<Note>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM notes WHERE author_id = ?1 ORDER BY id DESC",
            NOTE_COLUMNS
        ))?;
        let notes = stmt
            .query_map([author_id], note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    /// Update a note's title, text, and slug. Returns the new row, or None
    /// if the id does not exist.
    pub fn update_note(
        &self,
        id: i64,
        title: &str,
        text: &str,
        slug: &str,
    ) -> SqliteResult<Option<Note>> {
        {
            let conn = self.conn.lock().unwrap();
            let now_str = Utc::now().to_rfc3339();
            let rows = conn.execute(
                "UPDATE notes SET title = ?1, text = ?2, slug = ?3, updated_at = ?4 WHERE id = ?5",
                params![title, text, slug, &now_str, id],
            )?;
            if rows == 0 {
                return Ok(None);
            }
        }
        self.get_note_by_id(id)
    }

    /// Delete a note by id. Returns whether a row was removed.
    pub fn delete_note(&self, id: i64) -> SqliteResult<bool> {
        let conn = self.conn.lock().unwrap();
        let rows = conn.execute("DELETE FROM notes WHERE id = ?1", [id])?;
        Ok(rows > 0)
    }

    /// Whether `slug` is already taken, optionally ignoring one note
    /// (the note being edited).
    pub fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> SqliteResult<bool> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = match exclude_id {
            Some(id) => conn.query_row(
                "SELECT COUNT(*) FROM notes WHERE slug = ?1 AND id != ?2",
                params![slug, id],
                |row| row.get(0),
            )?,
            None => conn.query_row(
                "SELECT COUNT(*) FROM notes WHERE slug = ?1",
                [slug],
                |row| row.get(0),
            )?,
        };
        Ok(count > 0)
    }

    /// Total number of notes across all authors
    pub fn count_notes(&self) -> SqliteResult<i64> {
        let conn = self.conn.lock().unwrap();
        conn.query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))
    }

    fn get_note_by_id(&self, id: i64) -> SqliteResult<Option<Note>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {} FROM notes WHERE id = ?1", NOTE_COLUMNS))?;
        stmt.query_row([id], note_from_row).optional()
    }
}
