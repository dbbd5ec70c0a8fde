//! Room slice: domain types, sort parsing, repository port, adapters and service.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;
pub mod sort;

pub use domain::{NewRoom, Room};
pub use repository::RoomRepository;
pub use service::RoomService;
pub use sort::{RoomSort, SortField};
