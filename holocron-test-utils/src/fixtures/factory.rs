//! Factory functions for generating mock catalog database models.
//!
//! Provides pure functions for creating database models with standard test values.
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests. Database fixtures reuse the same values so a model
//! built here matches the row inserted by the corresponding fixture.

use chrono::NaiveDate;

use crate::model::{CharacterModel, PlanetModel, UserModel, VehicleModel};

/// Subscription date assigned to every mock user.
pub fn mock_subscription_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 4).unwrap_or_default()
}

/// Email address assigned to a mock user, derived from the first name.
pub fn mock_email(first_name: &str) -> String {
    format!("{}@holonet.test", first_name.to_lowercase().replace(' ', "."))
}

/// Create a mock user database model for testing.
pub fn mock_user(id: i32, first_name: &str) -> UserModel {
    UserModel {
        id,
        first_name: first_name.to_string(),
        last_name: Some("Skywalker".to_string()),
        email: Some(mock_email(first_name)),
        subscription_date: mock_subscription_date(),
    }
}

/// Create a mock planet database model for testing.
pub fn mock_planet(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: Some(name.to_string()),
        population: 200_000,
        rotation_period: 23,
        orbital_period: 304,
        diameter: 10_465,
        gravity: 1.0,
        terrain: Some("desert".to_string()),
        surface_water: 1.0,
        climate: Some("arid".to_string()),
    }
}

/// Create a mock character database model for testing.
pub fn mock_character(id: i32, name: &str) -> CharacterModel {
    CharacterModel {
        id,
        name: Some(name.to_string()),
        species: Some("Human".to_string()),
        height: 172,
        mass: 77,
        gender: Some("male".to_string()),
        hair_color: Some("blond".to_string()),
        skin_color: Some("fair".to_string()),
    }
}

/// Create a mock vehicle database model for testing.
pub fn mock_vehicle(id: i32, name: &str) -> VehicleModel {
    VehicleModel {
        id,
        name: Some(name.to_string()),
        model: Some("Digger Crawler".to_string()),
        manufacturer: Some("Corellia Mining Corporation".to_string()),
        class_vehicle: Some("wheeled".to_string()),
        cost: 150_000,
        speed: 30,
        length: 36.8,
        cargo_capacity: 50_000,
        minimum_crew: 46,
        passengers: 30,
    }
}
