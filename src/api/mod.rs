//! API handlers and routing for the bookstore endpoints

pub mod books;
pub mod health;
pub mod openapi;

use std::num::IntErrorKind;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/books", get(books::list_books))
        .route("/books/:id", get(books::get_book))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// Book id taken from the `{id}` path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookId(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for BookId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let lenient = state.config.api.lenient_ids;

        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            // Undecodable segments (e.g. invalid UTF-8) are just another unparseable id
            Err(e) if lenient => {
                tracing::debug!("Coercing undecodable book id to 0: {}", e.body_text());
                return Ok(BookId(0));
            }
            Err(e) => return Err(AppError::BadRequest(e.body_text())),
        };

        parse_book_id(&raw, lenient).map(BookId)
    }
}

/// Parse a path segment as a book id.
///
/// With `lenient` set, out-of-range ids saturate to the nearest bound and
/// anything else that is not an integer becomes id 0.
pub fn parse_book_id(raw: &str, lenient: bool) -> AppResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) => Ok(id),
        Err(e) if lenient && *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(e) if lenient && *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        Err(_) if lenient => {
            tracing::debug!("Coercing invalid book id {:?} to 0", raw);
            Ok(0)
        }
        Err(e) => Err(AppError::BadRequest(format!("Invalid book id '{}': {}", raw, e))),
    }
}
