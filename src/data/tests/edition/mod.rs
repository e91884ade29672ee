use super::*;

mod link_creator;
mod upsert;
