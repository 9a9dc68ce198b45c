use crate::domain::Catalog;
use crate::router::App;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// App over the bundled seed data
pub fn seed_app(is_authorized: bool) -> App {
    let catalog = Catalog::builtin().unwrap_or_else(|e| panic!("Bundled seed failed to load: {e}"));
    App {
        catalog,
        is_authorized,
    }
}

pub fn request(method: Method, path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn get(path: &str) -> Request {
    request(Method::GET, path)
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
