//! Repository for the `users` table.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::user::NewUser;

/// Repository for the `users` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user, stamping `created_at` and `updated_at` with the current time
    pub async fn create(&self, new_user: NewUser) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(new_user.name),
            email: ActiveValue::Set(new_user.email),
            email_verified_at: ActiveValue::Set(new_user.email_verified_at),
            password: ActiveValue::Set(new_user.password),
            remember_token: ActiveValue::Set(new_user.remember_token),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Creates every user in `new_users`, returning the models in insertion order
    ///
    /// Stops at the first failing insert. Run inside a transaction if a partial
    /// batch must not be left behind.
    pub async fn create_many(
        &self,
        new_users: Vec<NewUser>,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        let mut users = Vec::with_capacity(new_users.len());

        for new_user in new_users {
            users.push(self.create(new_user).await?);
        }

        Ok(users)
    }

    /// Gets a user by primary key
    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets a user by email address
    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Counts the rows in the `users` table
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }

    /// Deletes every user
    pub async fn delete_all(&self) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_many().exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use crate::model::user::NewUser;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            email_verified_at: None,
            password: "hashed".to_string(),
            remember_token: None,
        }
    }

    mod create {
        use roster_test_utils::prelude::*;

        use crate::data::user::{tests::new_user, UserRepository};

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_table().build().await?;
            let user_repository = UserRepository::new(&test.db);

            let user = user_repository.create(new_user("a@example.com")).await?;

            assert_eq!(user.email, "a@example.com");
            assert_eq!(user.created_at, user.updated_at);
            test.assert_database_count("users", 1).await?;

            Ok(())
        }

        /// Expect Error when inserting a second user with the same email
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_table().build().await?;
            let user_repository = UserRepository::new(&test.db);

            user_repository.create(new_user("a@example.com")).await?;
            let result = user_repository.create(new_user("a@example.com")).await;

            assert!(result.is_err());
            test.assert_database_count("users", 1).await?;

            Ok(())
        }

        /// Expect Error when creating a user without required tables being created
        #[tokio::test]
        async fn fails_without_table() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            let user_repository = UserRepository::new(&test.db);

            let result = user_repository.create(new_user("a@example.com")).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod create_many {
        use roster_test_utils::prelude::*;

        use crate::data::user::{tests::new_user, UserRepository};

        /// Expect every user to be created in order
        #[tokio::test]
        async fn creates_all_users() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_table().build().await?;
            let user_repository = UserRepository::new(&test.db);

            let users = user_repository
                .create_many(vec![new_user("a@example.com"), new_user("b@example.com")])
                .await?;

            assert_eq!(users.len(), 2);
            assert_eq!(users[0].email, "a@example.com");
            assert_eq!(users[1].email, "b@example.com");
            test.assert_database_count("users", 2).await?;

            Ok(())
        }

        /// Expect no rows and no error for an empty batch
        #[tokio::test]
        async fn empty_batch_creates_nothing() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_table().build().await?;
            let user_repository = UserRepository::new(&test.db);

            let users = user_repository.create_many(Vec::new()).await?;

            assert!(users.is_empty());
            test.assert_database_count("users", 0).await?;

            Ok(())
        }
    }

    mod get {
        use roster_test_utils::prelude::*;

        use crate::data::user::UserRepository;

        /// Expect Some when the user exists, by id and by email
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_user_table()
                .with_mock_users(2)
                .build()
                .await?;
            let user_repository = UserRepository::new(&test.db);

            let by_id = user_repository.get(2).await?;
            let by_email = user_repository.get_by_email(&mock_user_email(2)).await?;

            assert!(by_id.is_some());
            assert_eq!(by_id, by_email);

            Ok(())
        }

        /// Expect None when the user does not exist
        #[tokio::test]
        async fn returns_none_for_missing_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_table().build().await?;
            let user_repository = UserRepository::new(&test.db);

            assert!(user_repository.get(1).await?.is_none());
            assert!(user_repository
                .get_by_email("missing@example.com")
                .await?
                .is_none());

            Ok(())
        }
    }

    mod count {
        use roster_test_utils::prelude::*;

        use crate::data::user::UserRepository;

        /// Expect the count to match the number of inserted rows
        #[tokio::test]
        async fn counts_rows() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_user_table()
                .with_mock_users(3)
                .build()
                .await?;
            let user_repository = UserRepository::new(&test.db);

            assert_eq!(user_repository.count().await?, 3);

            Ok(())
        }

        /// Expect Error when the table does not exist
        #[tokio::test]
        async fn fails_without_table() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;
            let user_repository = UserRepository::new(&test.db);

            assert!(user_repository.count().await.is_err());

            Ok(())
        }
    }

    mod delete {
        use roster_test_utils::prelude::*;

        use crate::data::user::UserRepository;

        /// Expect success when deleting user
        #[tokio::test]
        async fn deletes_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_user_table()
                .with_mock_users(1)
                .build()
                .await?;
            let user_repository = UserRepository::new(&test.db);

            let result = user_repository.delete(1).await?;

            assert_eq!(result.rows_affected, 1);
            test.assert_database_missing_email(&mock_user_email(1))
                .await?;

            Ok(())
        }

        /// Expect no rows to be affected when deleting user that does not exist
        #[tokio::test]
        async fn no_rows_for_missing_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_user_table()
                .with_mock_users(1)
                .build()
                .await?;
            let user_repository = UserRepository::new(&test.db);

            let result = user_repository.delete(2).await?;

            assert_eq!(result.rows_affected, 0);
            test.assert_database_count("users", 1).await?;

            Ok(())
        }

        /// Expect every row to be removed by delete_all
        #[tokio::test]
        async fn deletes_all_users() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_user_table()
                .with_mock_users(4)
                .build()
                .await?;
            let user_repository = UserRepository::new(&test.db);

            let result = user_repository.delete_all().await?;

            assert_eq!(result.rows_affected, 4);
            test.assert_database_count("users", 0).await?;

            Ok(())
        }
    }
}
