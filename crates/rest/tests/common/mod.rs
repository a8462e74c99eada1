//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server backed by an in-memory SQLite store
//! - [`fixtures`] - Request payloads and stored questions

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
