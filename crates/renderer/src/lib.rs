//! Rasterization of temperature series into PNG line charts.

pub mod chart;

pub use chart::{render_png, ChartParams, ChartSeries, LegendCorner, HEIGHT, WIDTH};
