use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use acme_store_api::{
    db::create_pool,
    error::AppError,
    routes::users::{AddFavoriteRequest, add_favorite, list_favorites, remove_favorite},
    store::Store,
};

// Single flow test: the schema is dropped and recreated at setup, so
// splitting this into parallel tests against one database would race.
#[tokio::test]
async fn store_and_favorites_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(());
            }
        };

    let pool = create_pool(&database_url).await?;
    let store = Store::new(pool);
    store.init_schema().await?;

    // User creation hashes the password and rejects duplicate usernames.
    let joe = store.create_user("joe", "password123").await?;
    assert_eq!(joe.username, "joe");
    assert_ne!(joe.password_hash, "password123");
    assert!(joe.password_hash.starts_with("$argon2"));

    let dup_user = store.create_user("joe", "other").await;
    assert!(matches!(dup_user, Err(AppError::Conflict(_))));

    let lucy = store.create_user("lucy", "password123").await?;

    // Products reject duplicate names.
    let pizza = store.create_product("pizza").await?;
    let pasta = store.create_product("pasta").await?;
    let dup_product = store.create_product("pizza").await;
    assert!(matches!(dup_product, Err(AppError::Conflict(_))));

    // Listing projects users to (id, username) and returns every row.
    let users = store.users().await?;
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u.id == joe.id && u.username == "joe"));

    let products = store.products().await?;
    assert_eq!(products.len(), 2);

    // Favorites enforce referential integrity and pair uniqueness.
    let missing = store.create_favorite(Uuid::new_v4(), pizza.id).await;
    assert!(matches!(missing, Err(AppError::BadRequest(_))));
    let missing_product = store.create_favorite(joe.id, Uuid::new_v4()).await;
    assert!(matches!(missing_product, Err(AppError::BadRequest(_))));

    let fav = store.create_favorite(lucy.id, pasta.id).await?;
    assert_eq!(fav.user_id, lucy.id);
    assert_eq!(fav.product_id, pasta.id);

    let dup_fav = store.create_favorite(lucy.id, pasta.id).await;
    assert!(matches!(dup_fav, Err(AppError::Conflict(_))));

    // A user with no favorites, and an ID matching no user at all, both
    // list as empty rather than erroring.
    assert!(store.favorites(joe.id).await?.is_empty());
    assert!(store.favorites(Uuid::new_v4()).await?.is_empty());

    // End-to-end through the HTTP handlers: joe favorites pizza.
    let (status, Json(created)) = add_favorite(
        State(store.clone()),
        Path(joe.id),
        Json(AddFavoriteRequest {
            product_id: pizza.id,
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.user_id, joe.id);
    assert_eq!(created.product_id, pizza.id);

    let Json(listed) = list_favorites(State(store.clone()), Path(joe.id)).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].product_name, "pizza");

    // Deleting is idempotent: a miss answers exactly like a hit.
    let status = remove_favorite(State(store.clone()), Path((joe.id, created.id))).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let status = remove_favorite(State(store.clone()), Path((joe.id, created.id))).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let Json(listed) = list_favorites(State(store.clone()), Path(joe.id)).await?;
    assert!(listed.is_empty());

    // Lucy's favorite was untouched by joe's delete.
    assert_eq!(store.favorites(lucy.id).await?.len(), 1);

    // Seeding starts from a clean schema and loads the sample rows.
    store.init_schema().await?;
    store.seed().await?;
    assert_eq!(store.users().await?.len(), 2);
    assert_eq!(store.products().await?.len(), 3);

    Ok(())
}
