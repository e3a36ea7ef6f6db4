//! Tests for UserFactory::create.

use proptest::prelude::*;
use roster::{data::user::UserRepository, factory::UserFactory};
use roster_test_utils::prelude::*;

async fn create_and_count(count: usize) -> Result<u64, TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    UserFactory::new().count(count).create(&test.db).await?;

    test.table_count("users").await
}

/// Tests creating five users through the factory.
///
/// Expected: five rows in the `users` table
#[tokio::test]
async fn creates_five_users() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    UserFactory::new().count(5).create(&test.db).await?;

    test.assert_database_count("users", 5).await?;

    Ok(())
}

/// Tests creating zero users through the factory.
///
/// Expected: empty `users` table
#[tokio::test]
async fn creates_no_users_for_zero_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let users = UserFactory::new().count(0).create(&test.db).await?;

    assert!(users.is_empty());
    test.assert_database_count("users", 0).await?;

    Ok(())
}

/// Tests running the same scenario twice in isolated databases.
///
/// Expected: identical counts, no leakage between contexts
#[tokio::test]
async fn repeated_runs_are_isolated() -> Result<(), TestError> {
    let first = create_and_count(5).await?;
    let second = create_and_count(5).await?;

    assert_eq!(first, 5);
    assert_eq!(second, 5);

    Ok(())
}

/// Tests that refreshing a context resets the table between scenarios.
///
/// Expected: five rows before refresh, zero after, five again after re-creating
#[tokio::test]
async fn refresh_resets_between_runs() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    UserFactory::new().count(5).create(&test.db).await?;
    test.assert_database_count("users", 5).await?;

    test.refresh().await?;
    test.assert_database_count("users", 0).await?;

    UserFactory::new().count(5).create(&test.db).await?;
    test.assert_database_count("users", 5).await?;

    Ok(())
}

/// Tests that created users are retrievable with their generated values.
///
/// Expected: each returned model matches the stored row
#[tokio::test]
async fn created_users_are_stored() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let user_repository = UserRepository::new(&test.db);

    let users = UserFactory::new()
        .count(3)
        .unverified()
        .create(&test.db)
        .await?;

    for user in users {
        let stored = user_repository.get_by_email(&user.email).await?;
        assert_eq!(stored.as_ref(), Some(&user));
        assert!(user.email_verified_at.is_none());
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// For any requested count, the `users` table ends up holding exactly that many rows.
    #[test]
    fn stored_count_equals_requested_count(count in 0usize..50) {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let stored = runtime.block_on(create_and_count(count)).unwrap();

        prop_assert_eq!(stored, count as u64);
    }
}
