//! API handlers and router for the bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Methods without a handler on a known path answer 400, not 405.
    let api = Router::new()
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .fallback(books::unsupported_method),
        )
        .route(
            "/book/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book)
                .fallback(books::unsupported_method),
        );

    let mut app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api)
        .with_state(state.clone());

    if state.config.api.enable_swagger {
        app = app.merge(openapi::create_openapi_router());
    }

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
