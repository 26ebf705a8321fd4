//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application. These aliases simplify type signatures and provide a single
//! point of reference for database model types.

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `first_name` - Required first name
/// - `last_name` - Optional last name
/// - `email` - Optional, unique across users
/// - `subscription_date` - Date the user subscribed
pub type UserModel = entity::user::Model;

/// Type alias for planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for vehicle database model.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for the link between a user and a favorite planet.
///
/// # Fields (from `entity::favorite_planet::Model`)
/// - `id` - Primary key of the link itself
/// - `user_id` - Foreign key to the user
/// - `planet_id` - Foreign key to the planet
pub type FavoritePlanetModel = entity::favorite_planet::Model;

/// Type alias for the link between a user and a favorite character.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Type alias for the link between a user and a favorite vehicle.
pub type FavoriteVehicleModel = entity::favorite_vehicle::Model;
