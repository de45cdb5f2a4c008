//! Server-rendered HTML pages.
//!
//! No template engine; each page is assembled from typed arguments so the
//! controllers stay declarative. All user-supplied strings pass through
//! `escape` before they reach markup.

use crate::forms::{FormErrors, NoteForm};
use crate::models::Note;

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - Notes</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a> <a href=\"/notes/\">My notes</a> \
         <a href=\"/notes/add/\">Add note</a> <a href=\"/auth/logout/\">Log out</a></nav>\n\
         {}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn field_error(error: &Option<String>) -> String {
    match error {
        Some(msg) => format!("<p class=\"error\">{}</p>", escape(msg)),
        None => String::new(),
    }
}

pub fn home_page() -> String {
    layout(
        "Welcome",
        "<h1>Notes</h1>\n<p>Keep your notes in one place. \
         <a href=\"/auth/login/\">Log in</a> or <a href=\"/auth/signup/\">sign up</a> to start.</p>",
    )
}

pub fn list_page(notes: &[Note]) -> String {
    let mut items = String::new();
    for note in notes {
        items.push_str(&format!(
            "<li class=\"note\"><a href=\"/notes/{}/\">{}</a></li>\n",
            escape(&note.slug),
            escape(&note.title)
        ));
    }
    let body = format!("<h1>My notes</h1>\n<ul class=\"note-list\">\n{}</ul>", items);
    layout("My notes", &body)
}

pub fn detail_page(note: &Note) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n\
         <p><a href=\"/notes/{slug}/edit/\">Edit</a> \
         <a href=\"/notes/{slug}/delete/\">Delete</a></p>",
        escape(&note.title),
        escape(&note.text),
        slug = escape(&note.slug),
    );
    layout(&note.title, &body)
}

/// Add/edit form. Re-rendered with the submitted values and any field
/// errors when validation fails.
pub fn note_form_page(heading: &str, action: &str, form: &NoteForm, errors: &FormErrors) -> String {
    let body = format!(
        "<h1>{}</h1>\n<form method=\"post\" action=\"{}\">\n\
         <label>Title <input type=\"text\" name=\"title\" value=\"{}\"></label>{}\n\
         <label>Text <textarea name=\"text\">{}</textarea></label>{}\n\
         <label>Slug <input type=\"text\" name=\"slug\" value=\"{}\"></label>{}\n\
         <button type=\"submit\">Save</button>\n</form>",
        escape(heading),
        escape(action),
        escape(&form.title),
        field_error(&errors.title),
        escape(&form.text),
        field_error(&errors.text),
        escape(&form.slug),
        field_error(&errors.slug),
    );
    layout(heading, &body)
}

pub fn delete_confirm_page(note: &Note) -> String {
    let body = format!(
        "<h1>Delete \"{}\"?</h1>\n\
         <form method=\"post\" action=\"/notes/{}/delete/\">\n\
         <button type=\"submit\">Delete</button>\n</form>\n\
         <p><a href=\"/notes/{}/\">Cancel</a></p>",
        escape(&note.title),
        escape(&note.slug),
        escape(&note.slug),
    );
    layout("Delete note", &body)
}

pub fn success_page() -> String {
    layout(
        "Done",
        "<h1>Done!</h1>\n<p>Your change was saved. <a href=\"/notes/\">Back to my notes</a></p>",
    )
}

pub fn login_page(next: &str, error: Option<&str>) -> String {
    let error_html = match error {
        Some(msg) => format!("<p class=\"error\">{}</p>", escape(msg)),
        None => String::new(),
    };
    let body = format!(
        "<h1>Log in</h1>\n{}\n<form method=\"post\" action=\"/auth/login/\">\n\
         <input type=\"hidden\" name=\"next\" value=\"{}\">\n\
         <label>Username <input type=\"text\" name=\"username\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Log in</button>\n</form>\n\
         <p><a href=\"/auth/signup/\">Sign up</a></p>",
        error_html,
        escape(next),
    );
    layout("Log in", &body)
}

pub fn signup_page(error: Option<&str>) -> String {
    let error_html = match error {
        Some(msg) => format!("<p class=\"error\">{}</p>", escape(msg)),
        None => String::new(),
    };
    let body = format!(
        "<h1>Sign up</h1>\n{}\n<form method=\"post\" action=\"/auth/signup/\">\n\
         <label>Username <input type=\"text\" name=\"username\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Sign up</button>\n</form>\n\
         <p><a href=\"/auth/login/\">Log in</a></p>",
        error_html,
    );
    layout("Sign up", &body)
}

pub fn logout_page() -> String {
    let body = "<h1>Log out</h1>\n<form method=\"post\" action=\"/auth/logout/\">\n\
                <button type=\"submit\">Log out</button>\n</form>";
    layout("Log out", body)
}

pub fn logged_out_page() -> String {
    layout(
        "Logged out",
        "<h1>You are logged out.</h1>\n<p><a href=\"/auth/login/\">Log in again</a></p>",
    )
}

pub fn not_found_page() -> String {
    layout("Not found", "<h1>Not found</h1>\n<p>No such page.</p>")
}

pub fn error_page() -> String {
    layout(
        "Error",
        "<h1>Something went wrong</h1>\n<p>Please try again later.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_in_form_values() {
        let form = NoteForm {
            title: "<script>".to_string(),
            text: "a & b".to_string(),
            slug: String::new(),
        };
        let html = note_form_page("Add note", "/notes/add/", &form, &FormErrors::default());
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_field_errors_rendered() {
        let mut errors = FormErrors::default();
        errors.slug = Some("taken - already in use".to_string());
        let html = note_form_page("Add note", "/notes/add/", &NoteForm::default(), &errors);
        assert!(html.contains("taken - already in use"));
    }
}
