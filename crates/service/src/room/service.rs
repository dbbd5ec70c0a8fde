use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{NewRoom, Room};
use super::repository::RoomRepository;
use super::sort::RoomSort;
use crate::errors::ServiceError;

/// Room business rules, independent of web framework and storage engine.
pub struct RoomService<R: RoomRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: RoomRepository + ?Sized> RoomService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate and store a room, returning its id.
    ///
    /// # Examples
    /// ```
    /// use service::room::{NewRoom, RoomService, repository::memory::InMemoryRoomRepository};
    /// use service::ServiceError;
    /// use std::sync::Arc;
    /// let svc = RoomService::new(Arc::new(InMemoryRoomRepository::new()));
    /// let id = tokio_test::block_on(svc.create(NewRoom { description: "Suite".into(), price: 1000 })).unwrap();
    /// assert_eq!(id, 1);
    /// let err = tokio_test::block_on(svc.create(NewRoom { description: "Suite".into(), price: 0 })).unwrap_err();
    /// assert_eq!(err, ServiceError::NotPositivePrice);
    /// ```
    #[instrument(skip(self, input), fields(price = input.price))]
    pub async fn create(&self, input: NewRoom) -> Result<i32, ServiceError> {
        if input.description.is_empty() {
            debug!("rejected room: empty description");
            return Err(ServiceError::EmptyDescription);
        }
        if input.price <= 0 {
            debug!("rejected room: price not positive");
            return Err(ServiceError::NotPositivePrice);
        }
        let id = self.repo.create(input).await?;
        info!(room_id = id, "room_created");
        Ok(id)
    }

    /// Delete a room after checking it exists.
    ///
    /// The lookup and the delete are two separate storage calls; a concurrent
    /// delete between them is not detected.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.repo.delete(id).await?;
        info!(room_id = id, "room_deleted");
        Ok(())
    }

    /// List rooms ordered as requested by `sort` (see [`RoomSort`]).
    #[instrument(skip(self))]
    pub async fn get_all(&self, sort: &str) -> Result<Vec<Room>, ServiceError> {
        let sort: RoomSort = sort.parse()?;
        self.repo.get_all(sort.field, sort.descending).await
    }

    pub async fn get(&self, id: i32) -> Result<Room, ServiceError> {
        self.repo.get_by_id(id).await?.ok_or(ServiceError::WrongRoomId)
    }
}
