//! Command handlers for the CLI.

pub(crate) mod browse;
