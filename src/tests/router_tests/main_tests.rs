// src/tests/router_tests/main_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, request, seed_app};
use http::Method;

#[test]
fn main_page_links_every_offer() {
    let app = seed_app(false);

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    for offer in app.catalog.offers() {
        assert!(
            body.contains(&format!(r#"href="/offer/{}""#, offer.id)),
            "main page did not link offer {}",
            offer.id
        );
    }
}

#[test]
fn unknown_path_is_not_found() {
    let app = seed_app(false);

    assert!(matches!(
        handle(get("/favorites"), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn post_to_known_path_is_rejected() {
    let app = seed_app(false);

    assert!(matches!(
        handle(request(Method::POST, "/offer/1"), &app),
        Err(ServerError::MethodNotAllowed)
    ));
}

#[test]
fn nested_offer_path_is_not_found() {
    let app = seed_app(false);

    assert!(matches!(
        handle(get("/offer/"), &app),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(get("/offer/1/reviews"), &app),
        Err(ServerError::NotFound)
    ));
}
