//! Data access layer repositories.
//!
//! Repositories are thin wrappers over SeaORM queries, generic over
//! [`ConnectionTrait`](sea_orm::ConnectionTrait) so they run equally against a
//! pooled connection or an open transaction.

pub mod user;
