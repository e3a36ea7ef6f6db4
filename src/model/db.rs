//! Database model type aliases.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `name` - Display name
/// - `email` - Unique email address
/// - `email_verified_at` - When the email was verified, `None` if unverified
/// - `password` - Hashed password
/// - `remember_token` - Persistent login token (nullable)
/// - `created_at` - Timestamp when the user was created
/// - `updated_at` - Timestamp of the last user record update
pub type UserModel = entity::user::Model;
