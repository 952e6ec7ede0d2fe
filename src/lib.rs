pub mod db;
pub mod extractors;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod names;
pub mod pagination;
pub mod quiz;
pub mod rejections;

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue, Method, StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::quizzes::routes())
        .fallback(rejections::not_found)
        .method_not_allowed_fallback(rejections::method_not_allowed)
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

/// Answers preflight requests and stamps the cross-origin headers on every response.
async fn cors(req: Request, next: Next) -> Response {
    let mut resp = if req.method() == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };

    let headers = resp.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(names::CORS_ALLOW_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(names::CORS_ALLOW_HEADERS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(names::CORS_ALLOW_METHODS),
    );

    resp
}
