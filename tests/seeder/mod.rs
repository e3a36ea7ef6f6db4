//! Tests for DatabaseSeeder::run against a migrated schema.

use roster::seeder::DatabaseSeeder;
use roster_test_utils::prelude::*;

/// Tests seeding a freshly migrated database.
///
/// Expected: reported count equals the seeded count and the table agrees
#[tokio::test]
async fn seeds_migrated_database() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let count = DatabaseSeeder::new(&test.db)
        .run(5)
        .await
        .expect("seeding failed");

    assert_eq!(count, 5);
    test.assert_database_count("users", 5).await?;

    Ok(())
}
