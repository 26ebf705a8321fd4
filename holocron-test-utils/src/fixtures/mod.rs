//! Test fixture modules for database record creation.
//!
//! - `catalog` - User, planet, character, and vehicle records
//! - `favorite` - Favorite links between users and catalog records
//! - `factory` - In-memory models for tests that don't touch the database

pub mod catalog;
pub mod factory;
pub mod favorite;
