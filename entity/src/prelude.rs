pub use super::character::Entity as Character;
pub use super::collected_edition::Entity as CollectedEdition;
pub use super::connection::Entity as Connection;
pub use super::continuity_conflict::Entity as ContinuityConflict;
pub use super::creator::Entity as Creator;
pub use super::edition_creator::Entity as EditionCreator;
pub use super::era::Entity as Era;
pub use super::event::Entity as Event;
pub use super::reading_path::Entity as ReadingPath;
pub use super::reading_path_entry::Entity as ReadingPathEntry;
pub use super::resource::Entity as Resource;
pub use super::retailer::Entity as Retailer;
pub use super::story_arc::Entity as StoryArc;
