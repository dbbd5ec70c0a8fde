//! Booking slice: domain types, repository port, adapters and service.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use domain::{Booking, NewBooking};
pub use repository::BookingRepository;
pub use service::BookingService;
