use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Booking: lookups by room, ordered by start date
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_date_start")
                    .table(Booking::Table)
                    .col(Booking::RoomId)
                    .col(Booking::DateStart)
                    .to_owned(),
            )
            .await?;

        // Room: listing sorted by price
        manager
            .create_index(
                Index::create()
                    .name("idx_room_price")
                    .table(Room::Table)
                    .col(Room::Price)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_booking_room_date_start").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_room_price").table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, RoomId, DateStart }

#[derive(DeriveIden)]
enum Room { Table, Price }
