//! Test harness for the roster workspace.
//!
//! Every [`TestContext`] owns a fresh in-memory SQLite database, so each test
//! starts from an empty, isolated schema. Use [`TestBuilder`] to declare tables
//! and fixture rows, then assert on the resulting database state.

pub mod assert;
pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::user::{factory, mock_user_email},
        TestBuilder, TestContext, TestError,
    };
}
