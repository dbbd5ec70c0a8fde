use async_trait::async_trait;

use super::domain::{NewRoom, Room};
use super::sort::SortField;
use crate::errors::ServiceError;

/// Persistence port for rooms. Implementations map rows to [`Room`] and
/// report storage failures as [`ServiceError::InternalService`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Insert a room and return the id assigned by storage.
    async fn create(&self, room: NewRoom) -> Result<i32, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
    async fn get_all(&self, field: SortField, descending: bool) -> Result<Vec<Room>, ServiceError>;
    /// `Ok(None)` when no room has this id.
    async fn get_by_id(&self, id: i32) -> Result<Option<Room>, ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod memory {
    use std::collections::BTreeMap;

    use tokio::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RoomTable {
        last_id: i32,
        rows: BTreeMap<i32, Room>,
    }

    /// Ids start at 1 and are never reused, like a `SERIAL` column.
    #[derive(Default)]
    pub struct InMemoryRoomRepository {
        table: Mutex<RoomTable>,
    }

    impl InMemoryRoomRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl RoomRepository for InMemoryRoomRepository {
        async fn create(&self, room: NewRoom) -> Result<i32, ServiceError> {
            let mut table = self.table.lock().await;
            table.last_id += 1;
            let id = table.last_id;
            table.rows.insert(id, Room { id, description: room.description, price: room.price });
            Ok(id)
        }

        async fn delete(&self, id: i32) -> Result<(), ServiceError> {
            self.table.lock().await.rows.remove(&id);
            Ok(())
        }

        async fn get_all(&self, field: SortField, descending: bool) -> Result<Vec<Room>, ServiceError> {
            let table = self.table.lock().await;
            let mut rooms: Vec<Room> = table.rows.values().cloned().collect();
            rooms.sort_by(|a, b| {
                let ord = match field {
                    SortField::Id => a.id.cmp(&b.id),
                    SortField::Price => a.price.cmp(&b.price),
                };
                if descending { ord.reverse() } else { ord }
            });
            Ok(rooms)
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<Room>, ServiceError> {
            Ok(self.table.lock().await.rows.get(&id).cloned())
        }
    }

}
