pub mod config;
pub mod logging;

pub mod blob;
pub mod catalog;
pub mod checksum;
pub mod identifier;
pub mod manifest;
pub mod meeting;
pub mod naming;
pub mod package;
pub mod plan;
pub mod session;
