//! Session-cookie authentication and password hashing.
//!
//! Every protected page goes through [`require_user`]: anonymous visitors
//! are bounced to the login page with a `next` parameter pointing back at
//! the URL they asked for. Passwords are stored as Argon2id PHC strings.

use actix_web::{web, HttpRequest, HttpResponse};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::models::User;
use crate::pages;
use crate::AppState;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session";

/// Login page path, also the redirect target for anonymous visitors.
pub const LOGIN_URL: &str = "/auth/login/";

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Resolve the session cookie to its user, if the session is still valid.
pub fn current_user(state: &web::Data<AppState>, req: &HttpRequest) -> Option<User> {
    let cookie = req.cookie(SESSION_COOKIE)?;
    let session = state.db.validate_session(cookie.value()).ok()??;
    state.db.get_user_by_id(session.user_id).ok().flatten()
}

/// Redirect an anonymous visitor to login, preserving the requested URL.
pub fn login_redirect(req: &HttpRequest) -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", format!("{}?next={}", LOGIN_URL, req.path())))
        .finish()
}

/// Require an authenticated user for a protected page.
pub fn require_user(
    state: &web::Data<AppState>,
    req: &HttpRequest,
) -> Result<User, HttpResponse> {
    match current_user(state, req) {
        Some(user) => Ok(user),
        None => Err(login_redirect(req)),
    }
}

/// 404 response shared by the owner-only note pages. Non-owners get the
/// same body as a missing slug, so foreign notes stay invisible.
pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(pages::not_found_page())
}
