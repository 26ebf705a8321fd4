use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(pk_auto(Planets::Id))
                    .col(string_len_null(Planets::Name, 250))
                    .col(big_integer(Planets::Population))
                    .col(integer(Planets::RotationPeriod))
                    .col(integer(Planets::OrbitalPeriod))
                    .col(integer(Planets::Diameter))
                    .col(double(Planets::Gravity))
                    .col(string_len_null(Planets::Terrain, 250))
                    .col(double(Planets::SurfaceWater))
                    .col(string_len_null(Planets::Climate, 250))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planets {
    Table,
    Id,
    Name,
    Population,
    RotationPeriod,
    OrbitalPeriod,
    Diameter,
    Gravity,
    Terrain,
    SurfaceWater,
    Climate,
}
