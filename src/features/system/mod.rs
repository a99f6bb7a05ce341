//! Operational endpoints: health, counts, and live route documentation.

pub mod dtos;
pub mod handlers;
pub mod routes;

pub use routes::SystemState;
