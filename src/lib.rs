//! Seed loader for the Marvel Cartographer continuity knowledge base.
//!
//! Reads the JSON data files describing eras, creators, characters, collected editions and
//! the records that reference them, and upserts them into PostgreSQL in dependency order.
//! Cross-file references are expressed as slugs and resolved to generated row identifiers
//! while the run progresses.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod seed;
pub mod startup;
pub mod util;
