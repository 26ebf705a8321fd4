//! Catalog API for planets, characters, and vehicles with per-user favorites.

pub mod model;
pub mod server;
