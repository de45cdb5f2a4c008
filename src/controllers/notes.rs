//! Note pages — list, detail, add, edit, delete, and the success page.
//!
//! Everything under `/notes/` requires a session; the per-note pages are
//! additionally owner-only and answer 404 to anyone else, so a foreign
//! note is indistinguishable from a missing one.

use actix_web::{web, HttpRequest, HttpResponse};

use super::{html, redirect, server_error};
use crate::auth;
use crate::forms::NoteForm;
use crate::models::{Note, User};
use crate::pages;
use crate::AppState;

/// Where successful mutations land.
const SUCCESS_URL: &str = "/notes/done/";

/// Look up a note by slug for `user`. Foreign and missing notes both
/// come back as a 404 response.
fn owned_note(
    data: &web::Data<AppState>,
    user: &User,
    slug: &str,
) -> Result<Note, HttpResponse> {
    match data.db.get_note_by_slug(slug) {
        Ok(Some(note)) if note.author_id == user.id => Ok(note),
        Ok(_) => Err(auth::not_found()),
        Err(e) => {
            log::error!("Failed to load note {}: {}", slug, e);
            Err(server_error())
        }
    }
}

async fn home() -> HttpResponse {
    html(pages::home_page())
}

async fn list_notes(data: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let user = match auth::require_user(&data, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    match data.db.list_notes_by_author(user.id) {
        Ok(notes) => html(pages::list_page(&notes)),
        Err(e) => {
            log::error!("Failed to list notes for user {}: {}", user.id, e);
            server_error()
        }
    }
}

async fn success(data: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Err(resp) = auth::require_user(&data, &req) {
        return resp;
    }
    html(pages::success_page())
}

async fn add_note_form(data: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Err(resp) = auth::require_user(&data, &req) {
        return resp;
    }
    html(pages::note_form_page(
        "Add note",
        "/notes/add/",
        &NoteForm::default(),
        &Default::default(),
    ))
}

async fn add_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<NoteForm>,
) -> HttpResponse {
    let user = match auth::require_user(&data, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    match form.clean(&data.db, None) {
        Ok(Ok(cleaned)) => {
            match data
                .db
                .create_note(&cleaned.title, &cleaned.text, &cleaned.slug, user.id)
            {
                Ok(note) => {
                    log::info!("User {} created note {}", user.username, note.slug);
                    redirect(SUCCESS_URL)
                }
                Err(e) => {
                    log::error!("Failed to create note: {}", e);
                    server_error()
                }
            }
        }
        Ok(Err(errors)) => html(pages::note_form_page(
            "Add note",
            "/notes/add/",
            &form,
            &errors,
        )),
        Err(e) => {
            log::error!("Failed to validate note form: {}", e);
            server_error()
        }
    }
}

async fn note_detail(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let user = match auth::require_user(&data, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let slug = path.into_inner();

    match owned_note(&data, &user, &slug) {
        Ok(note) => html(pages::detail_page(&note)),
        Err(resp) => resp,
    }
}

async fn edit_note_form(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let user = match auth::require_user(&data, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let slug = path.into_inner();

    let note = match owned_note(&data, &user, &slug) {
        Ok(note) => note,
        Err(resp) => return resp,
    };

    let form = NoteForm {
        title: note.title.clone(),
        text: note.text.clone(),
        slug: note.slug.clone(),
    };
    let action = format!("/notes/{}/edit/", note.slug);
    html(pages::note_form_page("Edit note", &action, &form, &Default::default()))
}

async fn edit_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    form: web::Form<NoteForm>,
) -> HttpResponse {
    let user = match auth::require_user(&data, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let slug = path.into_inner();

    let note = match owned_note(&data, &user, &slug) {
        Ok(note) => note,
        Err(resp) => return resp,
    };

    match form.clean(&data.db, Some(note.id)) {
        Ok(Ok(cleaned)) => {
            match data
                .db
                .update_note(note.id, &cleaned.title, &cleaned.text, &cleaned.slug)
            {
                Ok(Some(_)) => redirect(SUCCESS_URL),
                Ok(None) => auth::not_found(),
                Err(e) => {
                    log::error!("Failed to update note {}: {}", note.slug, e);
                    server_error()
                }
            }
        }
        Ok(Err(errors)) => {
            let action = format!("/notes/{}/edit/", note.slug);
            html(pages::note_form_page("Edit note", &action, &form, &errors))
        }
        Err(e) => {
            log::error!("Failed to validate note form: {}", e);
            server_error()
        }
    }
}

async fn delete_note_form(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let user = match auth::require_user(&data, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let slug = path.into_inner();

    match owned_note(&data, &user, &slug) {
        Ok(note) => html(pages::delete_confirm_page(&note)),
        Err(resp) => resp,
    }
}

async fn delete_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    let user = match auth::require_user(&data, &req) {
        Ok(user) => user,
        Err(resp) => return resp,
    };
    let slug = path.into_inner();

    let note = match owned_note(&data, &user, &slug) {
        Ok(note) => note,
        Err(resp) => return resp,
    };

    match data.db.delete_note(note.id) {
        Ok(_) => {
            log::info!("User {} deleted note {}", user.username, note.slug);
            redirect(SUCCESS_URL)
        }
        Err(e) => {
            log::error!("Failed to delete note {}: {}", note.slug, e);
            server_error()
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home));
    cfg.service(
        web::scope("/notes")
            // Fixed paths before the {slug} patterns
            .service(web::resource("/").route(web::get().to(list_notes)))
            .service(
                web::resource("/add/")
                    .route(web::get().to(add_note_form))
                    .route(web::post().to(add_note)),
            )
            .service(web::resource("/done/").route(web::get().to(success)))
            .service(web::resource("/{slug}/").route(web::get().to(note_detail)))
            .service(
                web::resource("/{slug}/edit/")
                    .route(web::get().to(edit_note_form))
                    .route(web::post().to(edit_note)),
            )
            .service(
                web::resource("/{slug}/delete/")
                    .route(web::get().to(delete_note_form))
                    .route(web::post().to(delete_note)),
            ),
    );
}
