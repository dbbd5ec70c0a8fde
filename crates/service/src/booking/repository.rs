use async_trait::async_trait;

use super::domain::{Booking, NewBooking};
use crate::errors::ServiceError;

/// Persistence port for bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: NewBooking) -> Result<i32, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
    /// Bookings of one room ordered by `date_start` ascending.
    async fn get_by_room_id(&self, room_id: i32) -> Result<Vec<Booking>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod memory {
    use std::collections::BTreeMap;

    use tokio::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct BookingTable {
        last_id: i32,
        rows: BTreeMap<i32, Booking>,
    }

    #[derive(Default)]
    pub struct InMemoryBookingRepository {
        table: Mutex<BookingTable>,
    }

    impl InMemoryBookingRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl BookingRepository for InMemoryBookingRepository {
        async fn create(&self, booking: NewBooking) -> Result<i32, ServiceError> {
            let mut table = self.table.lock().await;
            table.last_id += 1;
            let id = table.last_id;
            table.rows.insert(
                id,
                Booking { id, room_id: booking.room_id, date_start: booking.date_start, date_end: booking.date_end },
            );
            Ok(id)
        }

        async fn delete(&self, id: i32) -> Result<(), ServiceError> {
            self.table.lock().await.rows.remove(&id);
            Ok(())
        }

        async fn get_by_room_id(&self, room_id: i32) -> Result<Vec<Booking>, ServiceError> {
            let table = self.table.lock().await;
            let mut bookings: Vec<Booking> = table.rows.values().filter(|b| b.room_id == room_id).cloned().collect();
            bookings.sort_by_key(|b| b.date_start);
            Ok(bookings)
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, ServiceError> {
            Ok(self.table.lock().await.rows.get(&id).cloned())
        }
    }

}
