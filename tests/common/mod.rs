//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use actix_web::cookie::Cookie;
use actix_web::web;

use notes_backend::db::Database;
use notes_backend::models::{Note, User};
use notes_backend::{auth, AppState};

/// Password shared by every fixture user.
pub const PASSWORD: &str = "correct horse battery staple";

fn password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| auth::hash_password(PASSWORD).expect("Failed to hash password"))
}

/// Fresh application state over an in-memory database.
pub fn state() -> web::Data<AppState> {
    let db = Database::open_in_memory().expect("Failed to open test db");
    web::Data::new(AppState { db: Arc::new(db) })
}

pub fn create_user(state: &web::Data<AppState>, username: &str) -> User {
    state
        .db
        .create_user(username, password_hash())
        .expect("Failed to create user")
}

/// The force-login shortcut: open a session directly in the database and
/// hand back the cookie a browser would carry.
pub fn login(state: &web::Data<AppState>, user: &User) -> Cookie<'static> {
    let session = state
        .db
        .create_session(user.id)
        .expect("Failed to create session");
    Cookie::build(auth::SESSION_COOKIE, session.token)
        .path("/")
        .finish()
}

/// One pre-existing note owned by `author`, as most scenarios start from.
pub fn seed_note(state: &web::Data<AppState>, author: &User) -> Note {
    state
        .db
        .create_note("Note title", "Note text", "test_slug", author.id)
        .expect("Failed to seed note")
}
