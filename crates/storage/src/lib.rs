pub mod error;
pub mod models;
pub mod repository;
pub mod rest;
pub mod store;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use error::{Result, StorageError};
pub use repository::CourseRepository;
pub use rest::RestStore;
pub use store::CourseStore;

/// Connection pool for the Postgres backend.
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn courses(&self) -> CourseRepository<'_> {
        CourseRepository::new(&self.pool)
    }
}
