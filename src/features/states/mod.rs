//! State resource feature.
//!
//! States carry a composite uniqueness invariant: the `(code,
//! country_code)` pair must be unique across the collection. The store
//! does not enforce it; the service does, by checking its in-memory cache
//! before every insert. That is why every public operation first makes
//! sure the cache is populated.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/state/read` | List states |
//! | POST | `/state`, `/state/read` | Create a state |
//! | GET | `/state/{id}` | Get a state by id |
//! | PUT | `/state/{id}` | Update a state by id |
//! | DELETE | `/state/{id}` | Delete a state by id |
//! | DELETE | `/state` | Delete a state by name + code |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::StateService;
