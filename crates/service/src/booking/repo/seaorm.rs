use std::sync::Arc;

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use models::booking;

use crate::booking::domain::{Booking, NewBooking};
use crate::booking::repository::BookingRepository;
use crate::errors::ServiceError;

/// PostgreSQL-backed booking repository.
pub struct SeaOrmBookingRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SeaOrmBookingRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn create(&self, input: NewBooking) -> Result<i32, ServiceError> {
        let am = booking::ActiveModel {
            room_id: Set(input.room_id),
            date_start: Set(input.date_start),
            date_end: Set(input.date_end),
            ..Default::default()
        };
        let created = am.insert(&*self.db).await.map_err(ServiceError::internal)?;
        Ok(created.id)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        booking::Entity::delete_by_id(id).exec(&*self.db).await.map_err(ServiceError::internal)?;
        Ok(())
    }

    async fn get_by_room_id(&self, room_id: i32) -> Result<Vec<Booking>, ServiceError> {
        let rows = booking::Entity::find()
            .filter(booking::Column::RoomId.eq(room_id))
            .order_by_asc(booking::Column::DateStart)
            .all(&*self.db)
            .await
            .map_err(ServiceError::internal)?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, ServiceError> {
        let found = booking::Entity::find_by_id(id).one(&*self.db).await.map_err(ServiceError::internal)?;
        Ok(found.map(Booking::from))
    }
}
