use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct FavoriteVehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteVehicleRepository<'a, C> {
    /// Creates a new instance of [`FavoriteVehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Links a vehicle to a user as a favorite
    ///
    /// Fails with a unique constraint violation if the user already has the vehicle
    /// as a favorite, or a foreign key violation if either record does not exist.
    pub async fn create(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<entity::favorite_vehicle::Model, DbErr> {
        let favorite = entity::favorite_vehicle::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Finds the link between a user and a vehicle
    pub async fn find(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<Option<entity::favorite_vehicle::Model>, DbErr> {
        entity::prelude::FavoriteVehicle::find()
            .filter(entity::favorite_vehicle::Column::UserId.eq(user_id))
            .filter(entity::favorite_vehicle::Column::VehicleId.eq(vehicle_id))
            .one(self.db)
            .await
    }

    /// Deletes a favorite link by its own ID
    ///
    /// Returns OK regardless of the link existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteVehicle::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Gets every vehicle the user has marked as a favorite, in the order they were added
    pub async fn get_favorite_vehicles(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        let favorites = entity::prelude::FavoriteVehicle::find()
            .filter(entity::favorite_vehicle::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_vehicle::Column::Id)
            .find_also_related(entity::vehicle::Entity)
            .all(self.db)
            .await?;

        Ok(favorites
            .into_iter()
            .filter_map(|(_, vehicle)| vehicle)
            .collect())
    }
}
