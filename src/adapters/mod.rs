//! Adapters implementing the domain ports, plus the HTTP API.

pub mod audio;
pub mod cache;
pub mod http;
pub mod sqlite;
