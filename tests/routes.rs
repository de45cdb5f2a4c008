//! Page availability and redirect rules.

mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, App};

use notes_backend::configure_app;

fn location(resp: &actix_web::dev::ServiceResponse) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .expect("Missing Location header")
        .to_str()
        .unwrap()
}

#[actix_web::test]
async fn test_home_page_is_public() {
    let state = common::state();
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure_app)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_pages_availability_for_authenticated_user() {
    let state = common::state();
    let reader = common::create_user(&state, "reader");
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure_app)).await;

    for uri in ["/notes/", "/notes/done/", "/notes/add/"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .cookie(common::login(&state, &reader))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {} as reader", uri);
    }
}

#[actix_web::test]
async fn test_note_pages_only_available_to_author() {
    let state = common::state();
    let author = common::create_user(&state, "author");
    let reader = common::create_user(&state, "reader");
    let note = common::seed_note(&state, &author);
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure_app)).await;

    let urls = [
        format!("/notes/{}/", note.slug),
        format!("/notes/{}/delete/", note.slug),
        format!("/notes/{}/edit/", note.slug),
    ];

    for (user, expected) in [(&author, StatusCode::OK), (&reader, StatusCode::NOT_FOUND)] {
        for uri in &urls {
            let req = test::TestRequest::get()
                .uri(uri)
                .cookie(common::login(&state, user))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(
                resp.status(),
                expected,
                "GET {} as {}",
                uri,
                user.username
            );
        }
    }
}

#[actix_web::test]
async fn test_anonymous_user_redirected_to_login() {
    let state = common::state();
    let author = common::create_user(&state, "author");
    let note = common::seed_note(&state, &author);
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure_app)).await;

    let urls = [
        "/notes/".to_string(),
        "/notes/done/".to_string(),
        "/notes/add/".to_string(),
        format!("/notes/{}/", note.slug),
        format!("/notes/{}/delete/", note.slug),
        format!("/notes/{}/edit/", note.slug),
    ];

    for uri in &urls {
        let resp =
            test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND, "GET {}", uri);
        assert_eq!(
            location(&resp),
            format!("/auth/login/?next={}", uri),
            "redirect target for {}",
            uri
        );
    }
}

#[actix_web::test]
async fn test_auth_pages_available_to_everyone() {
    let state = common::state();
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure_app)).await;

    for uri in ["/auth/login/", "/auth/signup/", "/auth/logout/"] {
        let resp =
            test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
    }

    // Logout itself is a POST and still answers 200 for everyone
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/auth/logout/").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let state = common::state();
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure_app)).await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
