//! Test fixture modules for database record creation.
//!
//! - `user` - user records with fixed, predictable values
pub mod user;
