//! Shared fixtures for integration tests.

pub mod packet_dir;
