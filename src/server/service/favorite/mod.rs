//! Favorite service layer.
//!
//! Adds, removes, and lists the catalog records a user has marked as favorites. Every
//! operation first confirms the user and the target record exist so callers get a
//! specific not-found error rather than a foreign key failure.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::user::UserFavoritesDto,
    server::{
        data::{
            catalog::{CharacterRepository, PlanetRepository, UserRepository, VehicleRepository},
            favorite::{
                FavoriteCharacterRepository, FavoritePlanetRepository, FavoriteVehicleRepository,
            },
        },
        error::{catalog::CatalogError, favorite::FavoriteError, Error},
        model::{
            db::{FavoriteCharacterModel, FavoritePlanetModel, FavoriteVehicleModel, UserModel},
            favorite::FavoriteKind,
        },
    },
};

/// Service for managing the favorite links between users and catalog records.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user along with every record they have marked as a favorite.
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - User with favorites grouped by kind, empty kinds omitted
    /// - `Err(Error::CatalogError)` - User not found
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        let user = self.find_user(user_id).await?;

        let characters = FavoriteCharacterRepository::new(self.db)
            .get_favorite_characters(user.id)
            .await?;
        let vehicles = FavoriteVehicleRepository::new(self.db)
            .get_favorite_vehicles(user.id)
            .await?;
        let planets = FavoritePlanetRepository::new(self.db)
            .get_favorite_planets(user.id)
            .await?;

        Ok(UserFavoritesDto::new(user, characters, vehicles, planets))
    }

    /// Marks a planet as a favorite of the user.
    ///
    /// # Returns
    /// - `Ok(FavoritePlanetModel)` - The newly created link
    /// - `Err(Error::CatalogError)` - User or planet not found
    /// - `Err(Error::FavoriteError)` - Planet is already a favorite of the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, Error> {
        self.find_user(user_id).await?;

        if PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::PlanetNotFound(planet_id).into());
        }

        let favorite = FavoritePlanetRepository::new(self.db)
            .create(user_id, planet_id)
            .await
            .map_err(|e| conflict_or_db_err(e, FavoriteKind::Planet, user_id, planet_id))?;

        tracing::debug!(user_id, planet_id, "Added favorite planet");

        Ok(favorite)
    }

    /// Marks a character as a favorite of the user.
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacterModel)` - The newly created link
    /// - `Err(Error::CatalogError)` - User or character not found
    /// - `Err(Error::FavoriteError)` - Character is already a favorite of the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, Error> {
        self.find_user(user_id).await?;

        if CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::CharacterNotFound(character_id).into());
        }

        let favorite = FavoriteCharacterRepository::new(self.db)
            .create(user_id, character_id)
            .await
            .map_err(|e| conflict_or_db_err(e, FavoriteKind::Character, user_id, character_id))?;

        tracing::debug!(user_id, character_id, "Added favorite character");

        Ok(favorite)
    }

    /// Marks a vehicle as a favorite of the user.
    pub async fn add_favorite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<FavoriteVehicleModel, Error> {
        self.find_user(user_id).await?;

        if VehicleRepository::new(self.db)
            .get_by_id(vehicle_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::VehicleNotFound(vehicle_id).into());
        }

        let favorite = FavoriteVehicleRepository::new(self.db)
            .create(user_id, vehicle_id)
            .await
            .map_err(|e| conflict_or_db_err(e, FavoriteKind::Vehicle, user_id, vehicle_id))?;

        tracing::debug!(user_id, vehicle_id, "Added favorite vehicle");

        Ok(favorite)
    }

    /// Removes a planet from the user's favorites.
    ///
    /// Deletes the stored link found for the (user, planet) pair.
    ///
    /// # Returns
    /// - `Ok(())` - The link was deleted
    /// - `Err(Error::CatalogError)` - User or planet not found
    /// - `Err(Error::FavoriteError)` - Planet is not a favorite of the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite_planet(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        self.find_user(user_id).await?;

        if PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::PlanetNotFound(planet_id).into());
        }

        let favorite_repo = FavoritePlanetRepository::new(self.db);
        let Some(favorite) = favorite_repo.find(user_id, planet_id).await? else {
            return Err(FavoriteError::NotFavorite {
                kind: FavoriteKind::Planet,
                user_id,
                target_id: planet_id,
            }
            .into());
        };

        favorite_repo.delete(favorite.id).await?;

        tracing::debug!(user_id, planet_id, "Removed favorite planet");

        Ok(())
    }

    /// Removes a character from the user's favorites.
    ///
    /// Deletes the stored link found for the (user, character) pair.
    pub async fn remove_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<(), Error> {
        self.find_user(user_id).await?;

        if CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::CharacterNotFound(character_id).into());
        }

        let favorite_repo = FavoriteCharacterRepository::new(self.db);
        let Some(favorite) = favorite_repo.find(user_id, character_id).await? else {
            return Err(FavoriteError::NotFavorite {
                kind: FavoriteKind::Character,
                user_id,
                target_id: character_id,
            }
            .into());
        };

        favorite_repo.delete(favorite.id).await?;

        tracing::debug!(user_id, character_id, "Removed favorite character");

        Ok(())
    }

    /// Removes a vehicle from the user's favorites.
    pub async fn remove_favorite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<(), Error> {
        self.find_user(user_id).await?;

        if VehicleRepository::new(self.db)
            .get_by_id(vehicle_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::VehicleNotFound(vehicle_id).into());
        }

        let favorite_repo = FavoriteVehicleRepository::new(self.db);
        let Some(favorite) = favorite_repo.find(user_id, vehicle_id).await? else {
            return Err(FavoriteError::NotFavorite {
                kind: FavoriteKind::Vehicle,
                user_id,
                target_id: vehicle_id,
            }
            .into());
        };

        favorite_repo.delete(favorite.id).await?;

        tracing::debug!(user_id, vehicle_id, "Removed favorite vehicle");

        Ok(())
    }

    async fn find_user(&self, user_id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| CatalogError::UserNotFound(user_id).into())
    }
}

/// Maps a unique constraint violation on a favorite table to a duplicate favorite error.
fn conflict_or_db_err(err: DbErr, kind: FavoriteKind, user_id: i32, target_id: i32) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => FavoriteError::AlreadyFavorite {
            kind,
            user_id,
            target_id,
        }
        .into(),
        _ => err.into(),
    }
}
