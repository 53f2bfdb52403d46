use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{Favorite, FavoriteProduct, Product, UserSummary},
    routes::{health, products, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::list_favorites,
        users::add_favorite,
        users::remove_favorite,
        products::list_products,
    ),
    components(
        schemas(
            UserSummary,
            Product,
            Favorite,
            FavoriteProduct,
            users::AddFavoriteRequest,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Favorites", description = "Per-user favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
