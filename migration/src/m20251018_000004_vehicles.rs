use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicles::Id))
                    .col(string_len_null(Vehicles::Name, 250))
                    .col(string_len_null(Vehicles::Model, 250))
                    .col(string_len_null(Vehicles::Manufacturer, 250))
                    .col(string_len_null(Vehicles::ClassVehicle, 250))
                    .col(integer(Vehicles::Cost))
                    .col(integer(Vehicles::Speed))
                    .col(double(Vehicles::Length))
                    .col(integer(Vehicles::CargoCapacity))
                    .col(integer(Vehicles::MinimumCrew))
                    .col(integer(Vehicles::Passengers))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicles {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    ClassVehicle,
    Cost,
    Speed,
    Length,
    CargoCapacity,
    MinimumCrew,
    Passengers,
}
