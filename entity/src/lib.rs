//! SeaORM entities for the roster database.

pub mod prelude;

pub mod user;
