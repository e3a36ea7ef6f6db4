//! Tests for record factories against a real schema.
//!
//! These run the migrations to build the schema, then verify that persisting
//! factory output leaves exactly the requested rows behind.

mod user;
