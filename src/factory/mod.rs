//! Record factories producing plausible default field values.
//!
//! A factory describes how to build one record; `count`, states and overrides are
//! layered on top, and the result is either returned in memory with `make` or
//! persisted with `create`.

mod fake;
pub mod user;

pub use user::UserFactory;
