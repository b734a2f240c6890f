#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod renderer;

pub use renderer::{CHART_TITLE, ChartSize, PieChartRenderer, system_color};
