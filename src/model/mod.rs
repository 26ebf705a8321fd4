//! Transport models shared by the HTTP API.
//!
//! Each DTO is the flat, serializable view of a stored record. Conversions from
//! the database models live next to the DTOs so every handler serializes an
//! entity the same way.

pub mod api;
pub mod catalog;
pub mod user;
