//! services/api/src/lib.rs
//!
//! The trivia question service: a PostgreSQL-backed store adapter and the axum
//! REST layer in front of it.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
