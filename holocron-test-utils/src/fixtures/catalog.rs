use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{CharacterModel, PlanetModel, UserModel, VehicleModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { test: self }
    }
}

/// Inserts catalog records using the values from [`factory`].
pub struct CatalogFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_user(&self, first_name: &str) -> Result<UserModel, TestError> {
        let user = factory::mock_user(0, first_name);

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                first_name: ActiveValue::Set(user.first_name),
                last_name: ActiveValue::Set(user.last_name),
                email: ActiveValue::Set(user.email),
                subscription_date: ActiveValue::Set(user.subscription_date),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        let planet = factory::mock_planet(0, name);

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(planet.name),
                population: ActiveValue::Set(planet.population),
                rotation_period: ActiveValue::Set(planet.rotation_period),
                orbital_period: ActiveValue::Set(planet.orbital_period),
                diameter: ActiveValue::Set(planet.diameter),
                gravity: ActiveValue::Set(planet.gravity),
                terrain: ActiveValue::Set(planet.terrain),
                surface_water: ActiveValue::Set(planet.surface_water),
                climate: ActiveValue::Set(planet.climate),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_character(&self, name: &str) -> Result<CharacterModel, TestError> {
        let character = factory::mock_character(0, name);

        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(character.name),
                species: ActiveValue::Set(character.species),
                height: ActiveValue::Set(character.height),
                mass: ActiveValue::Set(character.mass),
                gender: ActiveValue::Set(character.gender),
                hair_color: ActiveValue::Set(character.hair_color),
                skin_color: ActiveValue::Set(character.skin_color),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_vehicle(&self, name: &str) -> Result<VehicleModel, TestError> {
        let vehicle = factory::mock_vehicle(0, name);

        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(vehicle.name),
                model: ActiveValue::Set(vehicle.model),
                manufacturer: ActiveValue::Set(vehicle.manufacturer),
                class_vehicle: ActiveValue::Set(vehicle.class_vehicle),
                cost: ActiveValue::Set(vehicle.cost),
                speed: ActiveValue::Set(vehicle.speed),
                length: ActiveValue::Set(vehicle.length),
                cargo_capacity: ActiveValue::Set(vehicle.cargo_capacity),
                minimum_crew: ActiveValue::Set(vehicle.minimum_crew),
                passengers: ActiveValue::Set(vehicle.passengers),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
