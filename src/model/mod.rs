//! Application models and database model aliases.

pub mod db;
pub mod user;
