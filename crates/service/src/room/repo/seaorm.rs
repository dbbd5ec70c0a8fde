use std::sync::Arc;

use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Order, QueryOrder, Set};

use models::room;

use crate::errors::ServiceError;
use crate::room::domain::{NewRoom, Room};
use crate::room::repository::RoomRepository;
use crate::room::sort::SortField;

/// PostgreSQL-backed room repository.
pub struct SeaOrmRoomRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SeaOrmRoomRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self { Self { db } }
}

fn sort_column(field: SortField) -> room::Column {
    match field {
        SortField::Id => room::Column::Id,
        SortField::Price => room::Column::Price,
    }
}

#[async_trait::async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn create(&self, input: NewRoom) -> Result<i32, ServiceError> {
        let am = room::ActiveModel {
            description: Set(input.description),
            price: Set(input.price),
            ..Default::default()
        };
        let created = am.insert(&*self.db).await.map_err(ServiceError::internal)?;
        Ok(created.id)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        room::Entity::delete_by_id(id).exec(&*self.db).await.map_err(ServiceError::internal)?;
        Ok(())
    }

    async fn get_all(&self, field: SortField, descending: bool) -> Result<Vec<Room>, ServiceError> {
        let order = if descending { Order::Desc } else { Order::Asc };
        let rows = room::Entity::find()
            .order_by(sort_column(field), order)
            .all(&*self.db)
            .await
            .map_err(ServiceError::internal)?;
        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Room>, ServiceError> {
        let found = room::Entity::find_by_id(id).one(&*self.db).await.map_err(ServiceError::internal)?;
        Ok(found.map(Room::from))
    }
}
