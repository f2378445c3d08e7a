//! Reusable Yew components.
pub(crate) mod daisy;
pub(crate) mod empty_state;
pub(crate) mod radar_chart;

pub(crate) use empty_state::EmptyState;
pub(crate) use radar_chart::RadarChart;
