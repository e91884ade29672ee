//! Test fixture modules.
//!
//! - `catalog` - Inserts parent catalog rows (eras, creators, editions) straight into the test database
//! - `factory` - Builds JSON records shaped like the entries of the seed data files

use crate::TestContext;

pub mod catalog;
pub mod factory;

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    pub setup: &'a TestContext,
}
