use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Favorite, FavoriteProduct, UserSummary},
    store::Store,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub product_id: Uuid,
}

pub fn router() -> Router<Store> {
    Router::new()
        .route("/", get(list_users))
        .route("/{id}/favorites", get(list_favorites).post(add_favorite))
        .route("/{user_id}/favorites/{id}", delete(remove_favorite))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List users", body = Vec<UserSummary>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(store): State<Store>) -> AppResult<Json<Vec<UserSummary>>> {
    let users = store.users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/favorites",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites for the user, empty if none or unknown user", body = Vec<FavoriteProduct>)
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<FavoriteProduct>>> {
    let favorites = store.favorites(id).await?;
    Ok(Json(favorites))
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/favorites",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Favorite created", body = Favorite),
        (status = 400, description = "Unknown user or product ID"),
        (status = 409, description = "Pair already favorited")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    let favorite = store.create_favorite(id, payload.product_id).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/{id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("id" = Uuid, Path, description = "Favorite ID")
    ),
    responses(
        (status = 204, description = "Deleted, or nothing matched")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(store): State<Store>,
    Path((user_id, id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    // A miss still answers 204; callers rely on the delete being idempotent.
    store.destroy_favorite(user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
