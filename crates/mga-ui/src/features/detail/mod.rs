//! Game detail page glue.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
