//! nestegg — investment analytics engine for a personal-finance tracker.
//!
//! Hexagonal architecture: analytics logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
