use cartographer_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;

use crate::{
    error::{seed::SeedError, Error},
    seed::{
        outcome::Tally,
        stage::{FailurePolicy, Stage},
        SeedPipeline,
    },
};

mod edition;

/// Builder with seed tables and an empty array for every required data file.
///
/// Files added afterwards with the same name replace the empty ones.
fn seed_builder() -> TestBuilder {
    Stage::ALL
        .into_iter()
        .filter(|stage| stage.load_policy() == FailurePolicy::Fatal)
        .fold(TestBuilder::new().with_seed_tables(), |builder, stage| {
            builder.with_data_file(stage.file_name(), json!([]))
        })
}
