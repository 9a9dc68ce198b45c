use thiserror::Error;

/// Errors raised while routing a request. A missing offer is not one of them.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::InternalError => 500,
        }
    }
}

/// Seed data problems. Raised once while loading, never while rendering a page.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("seed data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("offer {id}: rating {rating} is outside 0..=5")]
    RatingOutOfRange { id: String, rating: f64 },
    #[error("offer {id}: location is not a finite coordinate")]
    BadLocation { id: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid {expected}: {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}
