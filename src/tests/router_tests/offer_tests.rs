// src/tests/router_tests/offer_tests.rs

use crate::domain::catalog::fixtures::offer;
use crate::domain::Catalog;
use crate::router::{handle, App};
use crate::tests::utils::{body_string, get, seed_app};

fn render(app: &App, path: &str) -> String {
    let mut resp = handle(get(path), app).unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(content_type, "text/html; charset=utf-8");

    body_string(&mut resp)
}

#[test]
fn offer_page_titles_with_offer_name() {
    let app = App {
        catalog: Catalog::new(vec![offer("1", "Loft")]),
        is_authorized: false,
    };

    let body = render(&app, "/offer/1");

    assert!(body.contains("<title>6 cities - Loft</title>"));
}

#[test]
fn unknown_offer_renders_degraded_page() {
    let app = seed_app(true);

    let body = render(&app, "/offer/does-not-exist");

    assert!(body.contains("<title>6 cities - undefined</title>"));
    assert!(body.contains(r#"<span class="reviews__amount">0</span>"#));
    assert!(body.contains(r#"data-selected="""#));
}

#[test]
fn seeded_offer_shows_its_details() {
    let app = seed_app(true);

    let body = render(&app, "/offer/1");

    assert!(body.contains("Beautiful &amp; luxurious apartment at great location"));
    assert_eq!(body.matches(r#"class="property__image-wrapper""#).count(), 6);
    assert_eq!(body.matches(r#"class="property__inside-item""#).count(), 10);
    assert_eq!(body.matches(r#"class="property__mark""#).count(), 1);
    assert_eq!(body.matches(r#"class="property__user-status""#).count(), 1);
    assert!(body.contains("width: 96%"));
    assert!(body.contains("April 2019"));
}

#[test]
fn map_centres_on_the_viewed_offer() {
    let app = seed_app(false);

    let body = render(&app, "/offer/5");

    assert!(body.contains(r#"data-city="Paris""#));
    assert!(body.contains(r#"data-selected="5""#));
}

#[test]
fn review_form_depends_on_auth_state() {
    let signed_in = render(&seed_app(true), "/offer/2");
    let guest = render(&seed_app(false), "/offer/2");

    assert!(signed_in.contains("reviews__form"));
    assert!(!guest.contains("reviews__form"));
}

#[test]
fn same_request_renders_same_page() {
    let app = seed_app(true);

    assert_eq!(render(&app, "/offer/3"), render(&app, "/offer/3"));
}
