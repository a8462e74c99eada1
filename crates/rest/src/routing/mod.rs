//! Route configuration for the trivia API.
//!
//! This module contains the routing configuration that maps HTTP paths
//! to handlers.

pub mod trivia_routes;

pub use trivia_routes::create_routes;
