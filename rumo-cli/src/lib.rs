//! rumo-cli library interface for testing
//!
//! Exposes the scoring client, configuration resolution, presenter and
//! session loop for integration tests.

pub mod config;
pub mod presenter;
pub mod scoring;
pub mod session;
