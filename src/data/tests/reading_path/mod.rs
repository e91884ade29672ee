use super::*;

mod insert_entry;
mod upsert;
