//! Helpers for tests that run against a real Postgres instance.

#![allow(missing_docs)]

use std::sync::Arc;

use sea_orm::{
    ColumnTrait, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Statement,
};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::entities::{Vote, vote};
use crate::migrations::Migrator;

/// Connection settings, read from `TEST_DB_*` environment variables.
#[derive(Debug, Clone)]
pub struct TestDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl Default for TestDbConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("TEST_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("TEST_DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5433),
            username: std::env::var("TEST_DB_USER")
                .unwrap_or_else(|_| "ideaboard_test".to_string()),
            password: std::env::var("TEST_DB_PASSWORD")
                .unwrap_or_else(|_| "ideaboard_test".to_string()),
            database: std::env::var("TEST_DB_NAME")
                .unwrap_or_else(|_| "ideaboard_test".to_string()),
        }
    }
}

impl TestDbConfig {
    #[must_use]
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database
        )
    }
}

/// A migrated test database.
pub struct TestDatabase {
    conn: Arc<DatabaseConnection>,
    pub config: TestDbConfig,
}

impl TestDatabase {
    /// Connect using the environment configuration and apply migrations.
    pub async fn new() -> Result<Self, DbErr> {
        Self::with_config(TestDbConfig::default()).await
    }

    pub async fn with_config(config: TestDbConfig) -> Result<Self, DbErr> {
        let conn = Database::connect(&config.database_url()).await?;
        Migrator::up(&conn, None).await?;

        info!(database = %config.database, "Connected to test database");

        Ok(Self {
            conn: Arc::new(conn),
            config,
        })
    }

    #[must_use]
    pub fn connection(&self) -> &DatabaseConnection {
        self.conn.as_ref()
    }

    /// Shared handle for constructing repositories.
    #[must_use]
    pub fn shared(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.conn)
    }

    /// Empty every table and reset id sequences.
    pub async fn cleanup(&self) -> Result<(), DbErr> {
        self.connection()
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                "TRUNCATE TABLE comments, votes, ideas RESTART IDENTITY CASCADE",
            ))
            .await?;

        info!("Cleaned up test database");
        Ok(())
    }

    /// Every stored vote row on an idea, in insertion order.
    pub async fn votes_for(&self, idea_id: i32) -> Result<Vec<vote::Model>, DbErr> {
        Vote::find()
            .filter(vote::Column::IdeaId.eq(idea_id))
            .order_by_asc(vote::Column::Id)
            .all(self.connection())
            .await
    }
}
