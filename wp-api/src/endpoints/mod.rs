//! Resource endpoint modules.
//!
//! Each module adds typed methods for one resource to `ApiClient`.

pub mod categories;
pub mod media;
pub mod posts;
pub mod site;
pub mod tags;
