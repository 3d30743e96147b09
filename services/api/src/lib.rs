//! Library exports for the API service
//!
//! This allows integration tests to exercise the handlers and repositories
//! directly.

pub mod auth;
pub mod error;
pub mod models;
pub mod profanity;
pub mod repositories;
pub mod routes;
pub mod state;
