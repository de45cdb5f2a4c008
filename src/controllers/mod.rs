pub mod health;
pub mod notes;
pub mod users;

use actix_web::HttpResponse;

use crate::pages;

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", location.to_string()))
        .finish()
}

pub(crate) fn server_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .body(pages::error_page())
}
