use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{Booking, NewBooking};
use super::repository::BookingRepository;
use crate::errors::ServiceError;
use crate::room::RoomRepository;

/// Booking business rules. Needs the room port to check that referenced
/// rooms exist.
pub struct BookingService<B: BookingRepository + ?Sized, R: RoomRepository + ?Sized> {
    bookings: Arc<B>,
    rooms: Arc<R>,
}

impl<B: BookingRepository + ?Sized, R: RoomRepository + ?Sized> BookingService<B, R> {
    pub fn new(bookings: Arc<B>, rooms: Arc<R>) -> Self { Self { bookings, rooms } }

    async fn ensure_room(&self, room_id: i32) -> Result<(), ServiceError> {
        match self.rooms.get_by_id(room_id).await? {
            Some(_) => Ok(()),
            None => {
                debug!(room_id, "room not found");
                Err(ServiceError::WrongRoomId)
            }
        }
    }

    /// Book a room for `[date_start, date_end)`.
    ///
    /// Overlapping bookings for the same room are accepted.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use service::booking::{BookingService, NewBooking, repository::memory::InMemoryBookingRepository};
    /// use service::room::{NewRoom, RoomRepository, repository::memory::InMemoryRoomRepository};
    /// use service::ServiceError;
    /// use std::sync::Arc;
    /// let rooms = Arc::new(InMemoryRoomRepository::new());
    /// let room_id = tokio_test::block_on(rooms.create(NewRoom { description: "Suite".into(), price: 1000 })).unwrap();
    /// let svc = BookingService::new(Arc::new(InMemoryBookingRepository::new()), rooms);
    /// let day = |d| NaiveDate::from_ymd_opt(2021, 1, d).unwrap();
    /// let id = tokio_test::block_on(svc.create(NewBooking { room_id, date_start: day(5), date_end: day(8) })).unwrap();
    /// assert_eq!(id, 1);
    /// let err = tokio_test::block_on(svc.create(NewBooking { room_id, date_start: day(9), date_end: day(8) })).unwrap_err();
    /// assert_eq!(err, ServiceError::WrongDates);
    /// ```
    #[instrument(skip(self, input), fields(room_id = input.room_id, date_start = %input.date_start, date_end = %input.date_end))]
    pub async fn create(&self, input: NewBooking) -> Result<i32, ServiceError> {
        self.ensure_room(input.room_id).await?;
        if !input.has_valid_dates() {
            debug!("rejected booking: date_start not before date_end");
            return Err(ServiceError::WrongDates);
        }
        let room_id = input.room_id;
        let id = self.bookings.create(input).await?;
        info!(booking_id = id, room_id, "booking_created");
        Ok(id)
    }

    /// Delete a booking after checking it exists. Not atomic, same as
    /// [`crate::room::RoomService::delete`].
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;
        self.bookings.delete(id).await?;
        info!(booking_id = id, "booking_deleted");
        Ok(())
    }

    /// Bookings of an existing room, earliest `date_start` first.
    #[instrument(skip(self))]
    pub async fn get_by_room_id(&self, room_id: i32) -> Result<Vec<Booking>, ServiceError> {
        self.ensure_room(room_id).await?;
        self.bookings.get_by_room_id(room_id).await
    }

    pub async fn get(&self, id: i32) -> Result<Booking, ServiceError> {
        self.bookings.get_by_id(id).await?.ok_or(ServiceError::WrongBookingId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::repository::MockBookingRepository;
    use crate::room::repository::MockRoomRepository;
    use crate::room::Room;
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn day(d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(2021, 1, d).unwrap() }

    fn input(start: u32, end: u32) -> NewBooking {
        NewBooking { room_id: 1, date_start: day(start), date_end: day(end) }
    }

    fn room_exists(rooms: &mut MockRoomRepository) {
        rooms
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(Room { id, description: "Suite".into(), price: 1000 })));
    }

    fn service(
        bookings: MockBookingRepository,
        rooms: MockRoomRepository,
    ) -> BookingService<MockBookingRepository, MockRoomRepository> {
        BookingService::new(Arc::new(bookings), Arc::new(rooms))
    }

    #[tokio::test]
    async fn create_ok() {
        let mut rooms = MockRoomRepository::new();
        room_exists(&mut rooms);
        let mut bookings = MockBookingRepository::new();
        bookings.expect_create().with(eq(input(5, 8))).times(1).returning(|_| Ok(1));

        assert_eq!(service(bookings, rooms).create(input(5, 8)).await, Ok(1));
    }

    #[tokio::test]
    async fn create_unknown_room() {
        let mut rooms = MockRoomRepository::new();
        rooms.expect_get_by_id().returning(|_| Ok(None));
        let mut bookings = MockBookingRepository::new();
        bookings.expect_create().never();

        assert_eq!(service(bookings, rooms).create(input(5, 8)).await, Err(ServiceError::WrongRoomId));
    }

    #[tokio::test]
    async fn create_room_is_checked_before_dates() {
        let mut rooms = MockRoomRepository::new();
        rooms.expect_get_by_id().returning(|_| Ok(None));
        let mut bookings = MockBookingRepository::new();
        bookings.expect_create().never();

        assert_eq!(service(bookings, rooms).create(input(9, 8)).await, Err(ServiceError::WrongRoomId));
    }

    #[tokio::test]
    async fn create_wrong_dates() {
        for (start, end) in [(9, 8), (8, 8)] {
            let mut rooms = MockRoomRepository::new();
            room_exists(&mut rooms);
            let mut bookings = MockBookingRepository::new();
            bookings.expect_create().never();

            assert_eq!(
                service(bookings, rooms).create(input(start, end)).await,
                Err(ServiceError::WrongDates),
                "{start}..{end}"
            );
        }
    }

    #[tokio::test]
    async fn create_storage_error() {
        let mut rooms = MockRoomRepository::new();
        room_exists(&mut rooms);
        let mut bookings = MockBookingRepository::new();
        bookings.expect_create().returning(|_| Err(ServiceError::internal("insert failed")));

        assert_eq!(
            service(bookings, rooms).create(input(5, 8)).await,
            Err(ServiceError::internal("insert failed"))
        );
    }

    #[tokio::test]
    async fn create_room_lookup_failure_is_internal() {
        let mut rooms = MockRoomRepository::new();
        rooms.expect_get_by_id().returning(|_| Err(ServiceError::internal("pool timed out")));
        let mut bookings = MockBookingRepository::new();
        bookings.expect_create().never();

        assert_eq!(
            service(bookings, rooms).create(input(5, 8)).await,
            Err(ServiceError::internal("pool timed out"))
        );
    }

    #[tokio::test]
    async fn delete_ok() {
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(Booking { id, room_id: 1, date_start: day(5), date_end: day(8) })));
        bookings.expect_delete().with(eq(1)).times(1).returning(|_| Ok(()));

        assert_eq!(service(bookings, MockRoomRepository::new()).delete(1).await, Ok(()));
    }

    #[tokio::test]
    async fn delete_missing_booking_skips_delete() {
        let mut bookings = MockBookingRepository::new();
        bookings.expect_get_by_id().returning(|_| Ok(None));
        bookings.expect_delete().never();

        assert_eq!(
            service(bookings, MockRoomRepository::new()).delete(1).await,
            Err(ServiceError::WrongBookingId)
        );
    }

    #[tokio::test]
    async fn delete_lookup_failure_is_internal() {
        let mut bookings = MockBookingRepository::new();
        bookings.expect_get_by_id().returning(|_| Err(ServiceError::internal("connection refused")));
        bookings.expect_delete().never();

        assert_eq!(
            service(bookings, MockRoomRepository::new()).delete(1).await,
            Err(ServiceError::internal("connection refused"))
        );
    }

    #[tokio::test]
    async fn delete_failure_is_propagated() {
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_get_by_id()
            .returning(|id| Ok(Some(Booking { id, room_id: 1, date_start: day(5), date_end: day(8) })));
        bookings.expect_delete().times(1).returning(|_| Err(ServiceError::internal("delete failed")));

        assert_eq!(
            service(bookings, MockRoomRepository::new()).delete(1).await,
            Err(ServiceError::internal("delete failed"))
        );
    }

    #[tokio::test]
    async fn get_by_room_id_ok() {
        let mut rooms = MockRoomRepository::new();
        room_exists(&mut rooms);
        let mut bookings = MockBookingRepository::new();
        let stored = vec![
            Booking { id: 1, room_id: 1, date_start: day(5), date_end: day(8) },
            Booking { id: 2, room_id: 1, date_start: day(25), date_end: day(28) },
        ];
        let returned = stored.clone();
        bookings.expect_get_by_room_id().with(eq(1)).returning(move |_| Ok(returned.clone()));

        assert_eq!(service(bookings, rooms).get_by_room_id(1).await, Ok(stored));
    }

    #[tokio::test]
    async fn get_by_room_id_empty_list() {
        let mut rooms = MockRoomRepository::new();
        room_exists(&mut rooms);
        let mut bookings = MockBookingRepository::new();
        bookings.expect_get_by_room_id().returning(|_| Ok(vec![]));

        assert_eq!(service(bookings, rooms).get_by_room_id(1).await, Ok(vec![]));
    }

    #[tokio::test]
    async fn get_by_room_id_unknown_room() {
        let mut rooms = MockRoomRepository::new();
        rooms.expect_get_by_id().returning(|_| Ok(None));
        let mut bookings = MockBookingRepository::new();
        bookings.expect_get_by_room_id().never();

        assert_eq!(service(bookings, rooms).get_by_room_id(1).await, Err(ServiceError::WrongRoomId));
    }

    #[tokio::test]
    async fn get_by_room_id_storage_error() {
        let mut rooms = MockRoomRepository::new();
        room_exists(&mut rooms);
        let mut bookings = MockBookingRepository::new();
        bookings.expect_get_by_room_id().returning(|_| Err(ServiceError::internal("select failed")));

        assert_eq!(
            service(bookings, rooms).get_by_room_id(1).await,
            Err(ServiceError::internal("select failed"))
        );
    }
}
