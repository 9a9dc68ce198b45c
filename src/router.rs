use crate::domain::Catalog;
use crate::errors::ServerError;
use crate::presenter::present;
use crate::responses::{html_response, ResultResp};
use crate::templates;
use astra::Request;

/// Shared, read-only state handed to every worker.
#[derive(Debug, Clone)]
pub struct App {
    pub catalog: Catalog,
    pub is_authorized: bool,
}

enum Route<'a> {
    Main,
    Offer(&'a str),
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    tracing::info!(%method, %path, "request");

    let route = match_route(path).ok_or(ServerError::NotFound)?;
    if method != "GET" {
        return Err(ServerError::MethodNotAllowed);
    }

    match route {
        Route::Main => html_response(templates::pages::main_page(&app.catalog, app.is_authorized)),
        Route::Offer(id) => offer(id, app),
    }
}

fn offer(id: &str, app: &App) -> ResultResp {
    let lookup = app.catalog.lookup(id);
    if lookup.offer().is_none() {
        tracing::warn!(%id, "offer not in catalog; rendering degraded page");
    }

    let vm = present(lookup, &app.catalog);
    html_response(templates::pages::offer_page(&vm, app.is_authorized))
}

fn match_route(path: &str) -> Option<Route<'_>> {
    if path == "/" {
        return Some(Route::Main);
    }

    let id = path.strip_prefix("/offer/")?;
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(Route::Offer(id))
}
