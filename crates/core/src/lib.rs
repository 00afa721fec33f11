//! Driftwood Core - Shared types library.
//!
//! Common types used by the storefront binary. The core crate contains only
//! types and their parsing/formatting logic - no I/O, no database access, no
//! HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Money and currency types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
