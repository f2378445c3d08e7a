//! Core, DOM-free primitives shared by the catalog and detail pages.
pub mod breakpoints;
pub mod controls;
pub mod logic;
pub mod store;
