pub use sea_orm_migration::prelude::*;

mod m20261019_000001_era;
mod m20261019_000002_creator;
mod m20261019_000003_character;
mod m20261019_000004_collected_edition;
mod m20261019_000005_edition_creator;
mod m20261019_000006_connection;
mod m20261019_000007_continuity_conflict;
mod m20261019_000008_story_arc;
mod m20261019_000009_event;
mod m20261019_000010_reading_path;
mod m20261019_000011_reading_path_entry;
mod m20261019_000012_retailer;
mod m20261019_000013_resource;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_era::Migration),
            Box::new(m20261019_000002_creator::Migration),
            Box::new(m20261019_000003_character::Migration),
            Box::new(m20261019_000004_collected_edition::Migration),
            Box::new(m20261019_000005_edition_creator::Migration),
            Box::new(m20261019_000006_connection::Migration),
            Box::new(m20261019_000007_continuity_conflict::Migration),
            Box::new(m20261019_000008_story_arc::Migration),
            Box::new(m20261019_000009_event::Migration),
            Box::new(m20261019_000010_reading_path::Migration),
            Box::new(m20261019_000011_reading_path_entry::Migration),
            Box::new(m20261019_000012_retailer::Migration),
            Box::new(m20261019_000013_resource::Migration),
        ]
    }
}
