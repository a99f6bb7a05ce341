//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the document store gateway and its backend implementations.

pub mod store;
