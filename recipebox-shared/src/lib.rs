//! # Recipebox Shared Library
//!
//! This crate contains the types and business logic shared by the
//! Recipebox API server and its tests.
//!
//! ## Module Organization
//!
//! - `models`: Database models and owner-scoped queries
//! - `auth`: Password hashing, token generation, bearer middleware
//! - `db`: Connection pool and migrations

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Recipebox shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
