//! Data access layer repositories.
//!
//! One repository per table. Each write is a single statement with an `ON CONFLICT` clause on
//! the table's natural key, so re-running a seed converges instead of duplicating rows.

pub mod character;
pub mod conflict;
pub mod connection;
pub mod creator;
pub mod edition;
pub mod era;
pub mod event;
pub mod reading_path;
pub mod resource;
pub mod retailer;
pub mod story_arc;

#[cfg(test)]
mod tests;
