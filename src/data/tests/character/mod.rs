use super::*;

mod upsert;
