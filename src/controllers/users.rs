//! Login, signup, and logout pages.
//!
//! These pages are public. A successful login or signup sets the session
//! cookie and redirects to `next` (or the note list).

use actix_web::{cookie::Cookie, web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::{html, server_error};
use crate::auth;
use crate::pages;
use crate::AppState;

/// Where login/signup land when no `next` was given.
const DEFAULT_NEXT: &str = "/notes/";

#[derive(Debug, Deserialize)]
struct NextQuery {
    #[serde(default)]
    next: String,
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    next: String,
}

#[derive(Debug, Deserialize)]
struct SignupForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// Only redirect within this site: `next` must be a local path, and
/// protocol-relative `//host` forms do not count.
fn safe_next(next: &str) -> &str {
    if next.starts_with('/') && !next.starts_with("//") {
        next
    } else {
        DEFAULT_NEXT
    }
}

fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(auth::SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .finish()
}

fn redirect_with_session(target: &str, token: &str) -> HttpResponse {
    HttpResponse::Found()
        .cookie(session_cookie(token))
        .insert_header(("Location", target.to_string()))
        .finish()
}

async fn login_form(query: web::Query<NextQuery>) -> HttpResponse {
    html(pages::login_page(&query.next, None))
}

async fn login(data: web::Data<AppState>, form: web::Form<LoginForm>) -> HttpResponse {
    let failed = || {
        html(pages::login_page(
            &form.next,
            Some("Invalid username or password."),
        ))
    };

    let user = match data.db.get_user_by_username(form.username.trim()) {
        Ok(Some(user)) => user,
        Ok(None) => return failed(),
        Err(e) => {
            log::error!("Failed to look up user: {}", e);
            return server_error();
        }
    };

    match auth::verify_password(&form.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => return failed(),
        Err(e) => {
            log::error!("Stored password hash for {} is unusable: {}", user.username, e);
            return server_error();
        }
    }

    match data.db.create_session(user.id) {
        Ok(session) => {
            log::info!("User {} logged in", user.username);
            redirect_with_session(safe_next(&form.next), &session.token)
        }
        Err(e) => {
            log::error!("Failed to create session: {}", e);
            server_error()
        }
    }
}

async fn signup_form() -> HttpResponse {
    html(pages::signup_page(None))
}

async fn signup(data: web::Data<AppState>, form: web::Form<SignupForm>) -> HttpResponse {
    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return html(pages::signup_page(Some(
            "Username and password are both required.",
        )));
    }

    match data.db.get_user_by_username(username) {
        Ok(Some(_)) => {
            return html(pages::signup_page(Some("That username is already taken.")));
        }
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to look up user: {}", e);
            return server_error();
        }
    }

    let password_hash = match auth::hash_password(&form.password) {
        Ok(hash) => hash,
        Err(e) => {
            log::error!("Failed to hash password: {}", e);
            return server_error();
        }
    };

    let user = match data.db.create_user(username, &password_hash) {
        Ok(user) => user,
        Err(e) => {
            log::error!("Failed to create user: {}", e);
            return server_error();
        }
    };

    match data.db.create_session(user.id) {
        Ok(session) => {
            log::info!("New user {} signed up", user.username);
            redirect_with_session(DEFAULT_NEXT, &session.token)
        }
        Err(e) => {
            log::error!("Failed to create session: {}", e);
            server_error()
        }
    }
}

async fn logout_form() -> HttpResponse {
    html(pages::logout_page())
}

async fn logout(data: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(cookie) = req.cookie(auth::SESSION_COOKIE) {
        if let Err(e) = data.db.delete_session(cookie.value()) {
            log::error!("Failed to delete session: {}", e);
        }
    }

    let mut removal = Cookie::new(auth::SESSION_COOKIE, "");
    removal.set_path("/");

    let mut resp = html(pages::logged_out_page());
    if let Err(e) = resp.add_removal_cookie(&removal) {
        log::error!("Failed to clear session cookie: {}", e);
    }
    resp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_next_rejects_offsite_targets() {
        assert_eq!(safe_next("/notes/add/"), "/notes/add/");
        assert_eq!(safe_next(""), DEFAULT_NEXT);
        assert_eq!(safe_next("https://evil.example"), DEFAULT_NEXT);
        assert_eq!(safe_next("//evil.example"), DEFAULT_NEXT);
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login/")
                    .route(web::get().to(login_form))
                    .route(web::post().to(login)),
            )
            .service(
                web::resource("/signup/")
                    .route(web::get().to(signup_form))
                    .route(web::post().to(signup)),
            )
            .service(
                web::resource("/logout/")
                    .route(web::get().to(logout_form))
                    .route(web::post().to(logout)),
            ),
    );
}
