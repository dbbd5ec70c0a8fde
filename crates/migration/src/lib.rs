//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20210101_000001_create_room;
mod m20210101_000002_create_booking;
mod m20210101_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20210101_000001_create_room::Migration),
            Box::new(m20210101_000002_create_booking::Migration),
            // Indexes should always be applied last
            Box::new(m20210101_000003_add_indexes::Migration),
        ]
    }
}
