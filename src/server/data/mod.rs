//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, organized by
//! domain: the catalog records themselves and the favorite links between users and
//! those records.

pub mod catalog;
pub mod favorite;
