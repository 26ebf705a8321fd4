//! Repositories for the links between users and their favorite catalog records.
//!
//! Each favorite table carries a unique index on `(user_id, <target>_id)`, so `create`
//! doubles as the duplicate check.

pub mod character;
pub mod planet;
pub mod vehicle;

pub use character::FavoriteCharacterRepository;
pub use planet::FavoritePlanetRepository;
pub use vehicle::FavoriteVehicleRepository;
