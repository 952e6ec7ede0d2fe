// Database module - the question store

use std::str::FromStr;

use color_eyre::{
    eyre::{ensure, OptionExt},
    Result,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub mod models;
pub use models::*;

mod category;
mod migrations;
mod question;

#[derive(Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Open the store at `url` (e.g. `sqlite://trivia.db`), creating the file
    /// if needed, and bring the schema up to date.
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let one: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_optional(&pool)
            .await?
            .ok_or_eyre("connection check failed")?;
        ensure!(one == 1, "connection check failed");

        migrations::run(&pool).await?;

        let db = Self { pool };
        db.check_category_ids().await?;

        tracing::info!("database connection has been verified");

        Ok(db)
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database connection closed");
    }

    pub async fn migration_applied(&self, version: &str) -> Result<bool> {
        let applied: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM schema_migrations WHERE version = ?)",
        )
        .bind(version)
        .fetch_one(&self.pool)
        .await?;

        Ok(applied)
    }

    // Quiz requests use category id 0 to mean "every category"; a stored
    // category with that id would be unreachable from the quiz endpoint.
    async fn check_category_ids(&self) -> Result<()> {
        let reserved: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?)")
                .bind(crate::names::ALL_CATEGORIES_ID)
                .fetch_one(&self.pool)
                .await?;

        if reserved {
            tracing::warn!(
                id = crate::names::ALL_CATEGORIES_ID,
                "a stored category uses the reserved all-categories id"
            );
        }

        Ok(())
    }
}
