use axum::{Json, Router, extract::State, routing::get};

use crate::{error::AppResult, models::Product, store::Store};

pub fn router() -> Router<Store> {
    Router::new().route("/", get(list_products))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "List products", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_products(State(store): State<Store>) -> AppResult<Json<Vec<Product>>> {
    let products = store.products().await?;
    Ok(Json(products))
}
