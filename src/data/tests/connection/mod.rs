use super::*;

mod insert;
