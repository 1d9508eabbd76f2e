//! HTTP request handlers for the plot API.

mod metrics;
mod plot;

pub use metrics::{health_handler, metrics_handler};
pub use plot::{landing_handler, mb925_temperature_handler, surface_temperature_handler};
