//! Page-level features.
pub mod catalog;
pub mod detail;
