//! Service layer for rooms and bookings.
//! - Validates input and cross-entity consistency before touching storage.
//! - Talks to storage only through the `RoomRepository` / `BookingRepository` ports.
//! - Ships a SeaORM adapter for PostgreSQL and an in-memory adapter for tests.

pub mod errors;
pub mod room;
pub mod booking;
#[cfg(test)]
pub mod test_support;

pub use booking::{BookingRepository, BookingService};
pub use errors::ServiceError;
pub use room::{RoomRepository, RoomService};
