use cartographer_seed::seed::{stage::Stage, SeedPipeline};
use cartographer_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;

mod catalog;
mod rerun;
