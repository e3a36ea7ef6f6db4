//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables
/// and fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Schema setup
    include_user_table: bool,
    run_migrations: bool,

    // Database fixtures to insert
    mock_users: usize,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_user_table: false,
            run_migrations: false,
            mock_users: 0,
        }
    }

    /// Add the `users` table to the test database, generated from the entity.
    pub fn with_user_table(mut self) -> Self {
        self.include_user_table = true;
        self
    }

    /// Build the schema by running every migration from scratch instead of from entities.
    ///
    /// Exercises the real migrations. Tables the migrations already created are
    /// left untouched by `with_user_table`.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Insert `count` mock users with ids `1..=count`.
    ///
    /// Requires the `users` table, either via `with_user_table` or `with_migrations`.
    /// Emails follow [`mock_user_email`](crate::fixtures::user::mock_user_email).
    pub fn with_mock_users(mut self, count: usize) -> Self {
        self.mock_users += count;
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Runs migrations, if requested
    /// 2. Creates the user table, if specified
    /// 3. Inserts database fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Schema setup or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Migrations
        if self.run_migrations {
            setup.refresh().await?;
        }

        // 2. Create tables
        if self.include_user_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            let mut stmt = schema.create_table_from_entity(entity::prelude::User);
            setup.with_tables(vec![stmt.if_not_exists().to_owned()]).await?;
        }

        // 3. Insert database fixtures
        for n in 1..=self.mock_users {
            setup.user().insert_mock_user(n as i32).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
