//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate so fixtures and tests
//! read the same way on both sides.

pub type UserModel = entity::user::Model;
pub type PlanetModel = entity::planet::Model;
pub type CharacterModel = entity::character::Model;
pub type VehicleModel = entity::vehicle::Model;
pub type FavoritePlanetModel = entity::favorite_planet::Model;
pub type FavoriteCharacterModel = entity::favorite_character::Model;
pub type FavoriteVehicleModel = entity::favorite_vehicle::Model;
