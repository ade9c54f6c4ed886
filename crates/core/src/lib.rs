//! Card Shop Core - Shared domain types.
//!
//! This crate provides the types shared by the card shop components:
//! - `admin` - Server-rendered CRUD administration interface
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! Database encoding for the ID newtypes is opt-in through the `postgres`
//! feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and money amounts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
