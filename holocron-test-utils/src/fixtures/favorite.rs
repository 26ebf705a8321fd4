use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{FavoriteCharacterModel, FavoritePlanetModel, FavoriteVehicleModel},
    TestContext,
};

impl TestContext {
    pub fn favorite<'a>(&'a self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { test: self }
    }
}

/// Inserts and inspects favorite link records.
pub struct FavoriteFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        Ok(
            entity::prelude::FavoritePlanet::insert(entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        Ok(entity::prelude::FavoriteCharacter::insert(
            entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_favorite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<FavoriteVehicleModel, TestError> {
        Ok(
            entity::prelude::FavoriteVehicle::insert(entity::favorite_vehicle::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                vehicle_id: ActiveValue::Set(vehicle_id),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Number of favorite planet rows linking the user to the planet.
    pub async fn count_favorite_planets(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<u64, TestError> {
        Ok(entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .count(&self.test.db)
            .await?)
    }

    /// Number of favorite character rows linking the user to the character.
    pub async fn count_favorite_characters(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<u64, TestError> {
        Ok(entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .count(&self.test.db)
            .await?)
    }

    /// Number of favorite vehicle rows linking the user to the vehicle.
    pub async fn count_favorite_vehicles(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<u64, TestError> {
        Ok(entity::prelude::FavoriteVehicle::find()
            .filter(entity::favorite_vehicle::Column::UserId.eq(user_id))
            .filter(entity::favorite_vehicle::Column::VehicleId.eq(vehicle_id))
            .count(&self.test.db)
            .await?)
    }
}
