//! SeaORM entities for the `room` and `booking` tables plus connection helpers.

pub mod db;
pub mod room;
pub mod booking;
