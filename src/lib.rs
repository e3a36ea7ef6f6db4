//! User records, factories and seeding on top of SeaORM.
//!
//! The crate is split the usual way for a SeaORM application: [`data`] holds the
//! repositories, [`factory`] generates plausible records for seeding and tests,
//! and [`seeder`] wires the two together for the binary.

#![warn(missing_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod factory;
pub mod model;
pub mod seeder;
pub mod startup;
pub mod util;
