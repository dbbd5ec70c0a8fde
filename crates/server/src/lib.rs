pub mod bookings;
pub mod errors;
pub mod openapi;
pub mod rooms;
pub mod routes;
pub mod startup;
pub mod state;

pub use routes::build_router;
pub use startup::run;
pub use state::AppState;
