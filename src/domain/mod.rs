//! Domain layer for the Pomodoro Forest backend
//!
//! This module contains core business types, errors and the port traits
//! that storage and I/O adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult, SelectionError};
