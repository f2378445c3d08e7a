//! Catalog browser feature wiring.
//!
//! # Design
//! - Session state and transitions live in `state`; the view only dispatches actions.
//! - Projection and chart config are pure so resize renders never refetch.

pub mod chart;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
