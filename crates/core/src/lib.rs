//! Core business logic for Coopbooks.
//!
//! This crate contains pure business logic with ZERO web or I/O dependencies.
//! Classification rules, balance calculations, and report assembly live here.
//!
//! # Modules
//!
//! - `reports` - Trial balance to balance sheet transformation

pub mod reports;
