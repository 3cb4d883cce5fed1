//! Core domain logic for todo-dash
//!
//! This module contains the task store with no direct I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Filter, Stats, EditSession)
//! - `services/` - The store and its persistence mapping
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
