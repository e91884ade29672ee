//! SeaORM entities for the continuity knowledge base tables.

pub mod prelude;

pub mod character;
pub mod collected_edition;
pub mod connection;
pub mod continuity_conflict;
pub mod creator;
pub mod edition_creator;
pub mod era;
pub mod event;
pub mod reading_path;
pub mod reading_path_entry;
pub mod resource;
pub mod retailer;
pub mod story_arc;
