//! Shared building blocks for the booking workspace: logging setup and
//! response types that are not tied to a single slice.

pub mod types;
pub mod utils;
