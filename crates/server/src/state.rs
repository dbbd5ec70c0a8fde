use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::booking::repo::seaorm::SeaOrmBookingRepository;
use service::room::repo::seaorm::SeaOrmRoomRepository;
use service::{BookingRepository, BookingService, RoomRepository, RoomService};

pub type DynRoomService = RoomService<dyn RoomRepository>;
pub type DynBookingService = BookingService<dyn BookingRepository, dyn RoomRepository>;

/// Shared handler state. Both services see the same room repository.
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<DynRoomService>,
    pub bookings: Arc<DynBookingService>,
}

impl AppState {
    pub fn new(rooms: Arc<dyn RoomRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self {
            rooms: Arc::new(RoomService::new(Arc::clone(&rooms))),
            bookings: Arc::new(BookingService::new(bookings, rooms)),
        }
    }

    pub fn from_db(db: Arc<DatabaseConnection>) -> Self {
        Self::new(
            Arc::new(SeaOrmRoomRepository::new(Arc::clone(&db))),
            Arc::new(SeaOrmBookingRepository::new(db)),
        )
    }
}
