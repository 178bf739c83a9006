//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod cards;
pub mod charts;
pub mod footer;
pub mod header;
pub mod insights;
pub mod logs;
