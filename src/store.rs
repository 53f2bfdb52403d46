use argon2::{
    Argon2, PasswordHasher,
    password_hash::SaltString,
};
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::{AppError, AppResult},
    models::{Favorite, FavoriteProduct, Product, User, UserSummary},
};

const SCHEMA: &[&str] = &[
    "DROP TABLE IF EXISTS favorites",
    "DROP TABLE IF EXISTS users",
    "DROP TABLE IF EXISTS products",
    r#"
    CREATE TABLE users (
        id UUID PRIMARY KEY,
        username VARCHAR(20) NOT NULL UNIQUE,
        password_hash VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE products (
        id UUID PRIMARY KEY,
        name VARCHAR(100) NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE favorites (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL REFERENCES users(id),
        product_id UUID NOT NULL REFERENCES products(id),
        CONSTRAINT unique_user_product UNIQUE (user_id, product_id)
    )
    "#,
];

/// Data-access layer. One method per operation, each a single parameterized
/// statement; constraint enforcement is left to the database.
#[derive(Clone)]
pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Drops and recreates every table. Destructive; call once at startup,
    /// never against data anyone wants to keep.
    pub async fn init_schema(&self) -> AppResult<()> {
        // Postgres prepared statements cannot contain multiple commands,
        // so each schema statement runs on its own.
        for stmt in SCHEMA {
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Hashes the password with a fresh random salt and inserts the user.
    /// The plaintext is never persisted. Returns the stored row, hash
    /// included; callers that serve HTTP must project it away.
    pub async fn create_user(&self, username: &str, password: &str) -> AppResult<User> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
            .to_string();

        let user: User = sqlx::query_as(
            "INSERT INTO users (id, username, password_hash) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn create_product(&self, name: &str) -> AppResult<Product> {
        let product: Product =
            sqlx::query_as("INSERT INTO products (id, name) VALUES ($1, $2) RETURNING *")
                .bind(Uuid::new_v4())
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(product)
    }

    /// Single insert, no existence pre-checks: an unknown user or product ID
    /// surfaces as a foreign-key violation, a repeated pair as a uniqueness
    /// violation on the (user_id, product_id) constraint.
    pub async fn create_favorite(&self, user_id: Uuid, product_id: Uuid) -> AppResult<Favorite> {
        let favorite: Favorite = sqlx::query_as(
            r#"
            INSERT INTO favorites (id, user_id, product_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(favorite)
    }

    pub async fn users(&self) -> AppResult<Vec<UserSummary>> {
        let users = sqlx::query_as::<_, UserSummary>("SELECT id, username FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    pub async fn products(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>("SELECT id, name FROM products")
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Favorites for one user, joined to product names. An ID that matches
    /// no user simply yields an empty vec.
    pub async fn favorites(&self, user_id: Uuid) -> AppResult<Vec<FavoriteProduct>> {
        let favorites = sqlx::query_as::<_, FavoriteProduct>(
            r#"
            SELECT f.id, p.name AS product_name
            FROM favorites f
            JOIN products p ON f.product_id = p.id
            WHERE f.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }

    /// Deletes the favorite matching both IDs. A miss (wrong user, already
    /// deleted) is a silent no-op; callers cannot tell the two apart.
    pub async fn destroy_favorite(&self, user_id: Uuid, favorite_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND id = $2")
            .bind(user_id)
            .bind(favorite_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Sample data for local development. Assumes a freshly initialized
    /// schema; duplicate usernames or product names will fail it.
    pub async fn seed(&self) -> AppResult<()> {
        let joe = self.create_user("joe", "password123").await?;
        let lucy = self.create_user("lucy", "password123").await?;

        let pizza = self.create_product("pizza").await?;
        let pasta = self.create_product("pasta").await?;
        let pie = self.create_product("pie").await?;

        self.create_favorite(joe.id, pizza.id).await?;
        self.create_favorite(joe.id, pasta.id).await?;
        self.create_favorite(lucy.id, pie.id).await?;

        Ok(())
    }
}
