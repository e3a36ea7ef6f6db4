//! User values that have not been persisted yet.

use chrono::NaiveDateTime;

/// Field values for a user that has not been persisted yet.
///
/// Produced by [`UserFactory::make`](crate::factory::UserFactory::make) and consumed by
/// [`UserRepository::create`](crate::data::user::UserRepository::create), which stamps
/// the row timestamps on insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address, unique per table.
    pub email: String,
    /// Verification timestamp, `None` for unverified users.
    pub email_verified_at: Option<NaiveDateTime>,
    /// Already hashed password.
    pub password: String,
    /// Persistent login token.
    pub remember_token: Option<String>,
}
