use cartographer_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    data::{
        character::CharacterRepository, conflict::ContinuityConflictRepository,
        connection::ConnectionRepository, creator::CreatorRepository, edition::EditionRepository,
        era::EraRepository, event::EventRepository, reading_path::ReadingPathRepository,
        resource::ResourceRepository, retailer::RetailerRepository,
        story_arc::StoryArcRepository,
    },
    model::{
        character::CharacterRecord, conflict::ContinuityConflictRecord,
        connection::ConnectionRecord, creator::CreatorRecord, edition::CollectedEditionRecord,
        era::EraRecord, event::EventRecord, reading_path::ReadingPathRecord,
        resource::ResourceRecord, retailer::RetailerRecord, story_arc::StoryArcRecord,
    },
};

mod character;
mod conflict;
mod connection;
mod creator;
mod edition;
mod era;
mod event;
mod reading_path;
mod resource;
mod retailer;
mod story_arc;
