//! Database model type aliases for test utilities.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;
