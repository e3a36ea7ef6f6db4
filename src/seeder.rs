//! Database seeding through the record factories.

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{data::user::UserRepository, error::Error, factory::UserFactory};

/// Populates the database with factory-generated records.
pub struct DatabaseSeeder<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatabaseSeeder<'a> {
    /// Creates a new instance of [`DatabaseSeeder`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create `user_count` users and return how many rows the `users` table now holds.
    ///
    /// # Arguments
    /// - `user_count` - Number of users to generate, `0` only reports the current count
    ///
    /// # Returns
    /// - `Ok(u64)` - Row count of the `users` table after seeding
    /// - `Err(Error::DbErr)` - Inserting or counting failed
    pub async fn run(&self, user_count: usize) -> Result<u64, Error> {
        if user_count > 0 {
            let users = UserFactory::new()
                .count(user_count)
                .create(self.db)
                .await?;

            info!("Seeded {} users", users.len());
        }

        Ok(UserRepository::new(self.db).count().await?)
    }
}
