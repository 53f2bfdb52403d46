use axum::Router;

use crate::store::Store;

pub mod doc;
pub mod health;
pub mod products;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<Store> {
    Router::new()
        .nest("/users", users::router())
        .nest("/products", products::router())
}
