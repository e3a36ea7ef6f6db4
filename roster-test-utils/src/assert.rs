//! Database state assertions.
//!
//! Each assertion queries the live test database and panics with a descriptive
//! message on mismatch. Query failures are returned as errors instead, so a
//! missing table is reported as such rather than as a wrong count.

use sea_orm::{
    sea_query::{Alias, Asterisk, Expr, Func, Query},
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::{context::TestContext, error::TestError};

impl TestContext {
    /// Count the rows in `table`.
    pub async fn table_count(&self, table: &str) -> Result<u64, TestError> {
        let stmt = Query::select()
            .expr_as(Func::count(Expr::col(Asterisk)), Alias::new("count"))
            .from(Alias::new(table))
            .to_owned();

        let count = match self.db.query_one(&stmt).await? {
            Some(row) => row.try_get::<i64>("", "count")?,
            None => 0,
        };

        Ok(count as u64)
    }

    /// Assert that `table` holds exactly `expected` rows.
    ///
    /// # Panics
    /// Panics if the row count differs from `expected`
    pub async fn assert_database_count(&self, table: &str, expected: u64) -> Result<(), TestError> {
        let actual = self.table_count(table).await?;

        assert_eq!(
            actual, expected,
            "expected {} rows in table `{}`, found {}",
            expected, table, actual
        );

        Ok(())
    }

    /// Assert that a user with `email` exists.
    ///
    /// # Panics
    /// Panics if no user row has this email
    pub async fn assert_database_has_email(&self, email: &str) -> Result<(), TestError> {
        let matches = self.users_with_email(email).await?;

        assert!(matches > 0, "expected a user with email `{}`", email);

        Ok(())
    }

    /// Assert that no user with `email` exists.
    ///
    /// # Panics
    /// Panics if a user row has this email
    pub async fn assert_database_missing_email(&self, email: &str) -> Result<(), TestError> {
        let matches = self.users_with_email(email).await?;

        assert_eq!(matches, 0, "expected no user with email `{}`", email);

        Ok(())
    }

    async fn users_with_email(&self, email: &str) -> Result<u64, TestError> {
        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?)
    }
}
