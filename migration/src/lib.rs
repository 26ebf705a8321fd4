pub use sea_orm_migration::prelude::*;

mod m20251018_000001_user;
mod m20251018_000002_planets;
mod m20251018_000003_characters;
mod m20251018_000004_vehicles;
mod m20251018_000005_favorite_planet;
mod m20251018_000006_favorite_character;
mod m20251018_000007_favorite_vehicle;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_user::Migration),
            Box::new(m20251018_000002_planets::Migration),
            Box::new(m20251018_000003_characters::Migration),
            Box::new(m20251018_000004_vehicles::Migration),
            Box::new(m20251018_000005_favorite_planet::Migration),
            Box::new(m20251018_000006_favorite_character::Migration),
            Box::new(m20251018_000007_favorite_vehicle::Migration),
        ]
    }
}
