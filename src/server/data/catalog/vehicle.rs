use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every vehicle, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        vehicle_id: i32,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod get_all {
        use holocron_test_utils::prelude::*;

        use crate::server::data::catalog::VehicleRepository;

        /// Expect every vehicle in ID order
        #[tokio::test]
        async fn returns_all_vehicles_in_id_order() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::Vehicle)
                .with_vehicle("Sand Crawler")
                .with_vehicle("T-16 skyhopper")
                .with_vehicle("X-34 landspeeder")
                .build()
                .await?;

            let vehicle_repo = VehicleRepository::new(&test.db);
            let vehicles = vehicle_repo.get_all().await?;

            let names: Vec<_> = vehicles.iter().map(|v| v.name.as_deref()).collect();
            assert_eq!(
                names,
                vec![
                    Some("Sand Crawler"),
                    Some("T-16 skyhopper"),
                    Some("X-34 landspeeder")
                ]
            );
            assert_eq!(vehicles[0].id, 1);

            Ok(())
        }

        /// Expect an empty list when no vehicles exist
        #[tokio::test]
        async fn returns_empty_for_no_vehicles() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::Vehicle)
                .build()
                .await?;

            let vehicle_repo = VehicleRepository::new(&test.db);
            let vehicles = vehicle_repo.get_all().await?;

            assert!(vehicles.is_empty());

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let vehicle_repo = VehicleRepository::new(&test.db);
            let result = vehicle_repo.get_all().await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_id {
        use holocron_test_utils::prelude::*;

        use crate::server::data::catalog::VehicleRepository;

        /// Expect Ok(Some(_)) when the vehicle exists
        #[tokio::test]
        async fn finds_existing_vehicle() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::Vehicle)
                .build()
                .await?;
            let vehicle_model = test.catalog().insert_vehicle("Sand Crawler").await?;

            let vehicle_repo = VehicleRepository::new(&test.db);
            let result = vehicle_repo.get_by_id(vehicle_model.id).await?;

            assert_eq!(result, Some(vehicle_model));

            Ok(())
        }

        /// Expect Ok(None) when the vehicle does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_vehicle() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::Vehicle)
                .with_vehicle("Sand Crawler")
                .build()
                .await?;

            let nonexistent_vehicle_id = 999;
            let vehicle_repo = VehicleRepository::new(&test.db);
            let result = vehicle_repo.get_by_id(nonexistent_vehicle_id).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
