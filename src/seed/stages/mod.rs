//! Stage implementations, grouped by what the stages reference.

mod catalog;
mod edition;
mod narrative;
mod reading_path;
mod storefront;
