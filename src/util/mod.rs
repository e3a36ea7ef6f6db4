//! Utility functions shared by the factory and repositories.

pub mod password;
