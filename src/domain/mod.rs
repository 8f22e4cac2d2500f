//! Core analytics types and computations.

pub mod asset;
pub mod benchmark;
pub mod cash_flow;
pub mod dividends;
pub mod error;
pub mod report;
pub mod returns;
pub mod risk;
pub mod sector;
