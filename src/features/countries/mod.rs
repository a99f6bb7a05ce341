//! Country resource feature.
//!
//! Countries are held entirely in memory; there is no backing store, so a
//! restart loses everything except the seed data. That is a documented
//! limitation of this resource, not a bug.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/countries/read` | List all countries |
//! | POST | `/countries` | Create a country |
//! | GET | `/countries/{id}` | Get a country by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CountryService;
