use serde::{Deserialize, Serialize};

use crate::server::model::db::{CharacterModel, PlanetModel, VehicleModel};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: Option<String>,
    pub population: i64,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub diameter: i32,
    pub gravity: f64,
    pub terrain: Option<String>,
    pub surface_water: f64,
    pub climate: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: Option<String>,
    pub species: Option<String>,
    pub height: i32,
    pub mass: i32,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub class_vehicle: Option<String>,
    pub cost: i32,
    pub speed: i32,
    pub length: f64,
    pub cargo_capacity: i32,
    pub minimum_crew: i32,
    pub passengers: i32,
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            population: planet.population,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            diameter: planet.diameter,
            gravity: planet.gravity,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
            climate: planet.climate,
        }
    }
}

impl From<CharacterModel> for CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            name: character.name,
            species: character.species,
            height: character.height,
            mass: character.mass,
            gender: character.gender,
            hair_color: character.hair_color,
            skin_color: character.skin_color,
        }
    }
}

impl From<VehicleModel> for VehicleDto {
    fn from(vehicle: VehicleModel) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            manufacturer: vehicle.manufacturer,
            class_vehicle: vehicle.class_vehicle,
            cost: vehicle.cost,
            speed: vehicle.speed,
            length: vehicle.length,
            cargo_capacity: vehicle.cargo_capacity,
            minimum_crew: vehicle.minimum_crew,
            passengers: vehicle.passengers,
        }
    }
}
