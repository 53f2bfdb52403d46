use acme_store_api::{config::AppConfig, db::create_pool, store::Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    let store = Store::new(pool);

    // Fresh schema every run; seeding into existing data would hit the
    // unique constraints anyway.
    store.init_schema().await?;
    store.seed().await?;

    println!("Sample data seeded successfully");
    Ok(())
}
