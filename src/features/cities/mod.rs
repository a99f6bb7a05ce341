//! City resource feature.
//!
//! Cities live in the document store and are mirrored by an in-memory
//! cache keyed by id. The cache is loaded lazily and rebuilt wholesale
//! after every mutation this service performs; it is never patched
//! incrementally.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/cities/read` | List cities, optionally sorted |
//! | POST | `/cities`, `/cities/read` | Create a city |
//! | GET | `/cities/{id}` | Get a city by id |
//! | PUT | `/cities/{id}` | Update a city by id |
//! | DELETE | `/cities/{id}` | Delete a city by id |
//! | DELETE | `/cities` | Delete a city by name + state_code |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CityService;
