//! Factory functions for generating mock user database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests.

use chrono::Utc;

use crate::{fixtures::user::mock_user_email, model::UserModel};

/// Create a mock user database model for testing.
///
/// # Arguments
/// - `id` - Primary key; also determines the email via `mock_user_email`
///
/// # Returns
/// - `UserModel` - A verified user with a placeholder password hash
pub fn mock_user_model(id: i32) -> UserModel {
    let now = Utc::now().naive_utc();
    UserModel {
        id,
        name: format!("Mock User {}", id),
        email: mock_user_email(id),
        email_verified_at: Some(now),
        password: "mock_password_hash".to_string(),
        remember_token: None,
        created_at: now,
        updated_at: now,
    }
}
