//! Chart endpoints: validate the request, load data, render the PNG.

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::Response,
};
use serde::Deserialize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{error, info, instrument};

use polar_common::{ChartError, ChartResult, Hemisphere, Level, RegionProfile};
use reanalysis::chart_series;
use renderer::{render_png, ChartParams, ChartSeries, LegendCorner};

use crate::state::AppState;
use crate::validation::{parse_region, parse_year};

/// Query parameters shared by both plot endpoints.
#[derive(Debug, Deserialize)]
pub struct PlotQuery {
    pub year: Option<String>,
    pub region: Option<String>,
}

/// GET / - Informational landing text.
pub async fn landing_handler() -> &'static str {
    "Generate an air temperature graph for a given region and year"
}

/// GET /plot-surface-temperature
#[instrument(skip(state))]
pub async fn surface_temperature_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<PlotQuery>,
) -> Response {
    plot_temperature(state, query, Level::Surface)
}

/// GET /plot-925mb-temperature
#[instrument(skip(state))]
pub async fn mb925_temperature_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<PlotQuery>,
) -> Response {
    plot_temperature(state, query, Level::Mb925)
}

fn plot_temperature(state: Arc<AppState>, query: PlotQuery, level: Level) -> Response {
    match build_chart(&state, &query, level) {
        Ok(png) => {
            state.metrics.charts_rendered.fetch_add(1, Ordering::Relaxed);
            png_response(png)
        }
        Err(err) => error_response(&state, err),
    }
}

/// Full request pipeline: validation, region resolution, dataset load,
/// climatology, rendering.
fn build_chart(state: &AppState, query: &PlotQuery, level: Level) -> ChartResult<Vec<u8>> {
    let year = parse_year(query.year.as_deref())?;
    let region = parse_region(query.region.as_deref())?;
    info!(%region, year, ?level, "rendering temperature chart");

    let (matrix, params) = match region.profile() {
        RegionProfile::Regional(profile) => {
            let matrix = state
                .data
                .load_regional(region.hemisphere(), level, profile.column)?;
            let bounds = profile.bounds(level);
            let title = match level {
                Level::Surface => format!(
                    "{} NCEP reanalysis surface air temperature",
                    profile.display_name
                ),
                Level::Mb925 => {
                    format!("{} NCEP reanalysis 925mb temperature", profile.display_name)
                }
            };
            let params = ChartParams {
                title,
                y_min: bounds.min,
                y_max: bounds.max,
                legend: legend_corner(region.hemisphere()),
            };
            (matrix, params)
        }
        RegionProfile::ArcticOceanWide { surface, mb925 } => {
            let matrix = state.data.load_arctic_ocean(level)?;
            let (bounds, title) = match level {
                Level::Surface => (
                    surface,
                    "NCEP reanalysis surface temperature over Arctic Ocean (°C)",
                ),
                Level::Mb925 => (
                    mb925,
                    "NCEP reanalysis 925 mb temperature over Arctic Ocean (°C)",
                ),
            };
            let params = ChartParams {
                title: title.to_string(),
                y_min: bounds.min,
                y_max: bounds.max,
                legend: LegendCorner::LowerCenter,
            };
            (matrix, params)
        }
    };

    let series = chart_series(&matrix, year)?;
    render_png(
        &ChartSeries {
            baseline: &series.baseline,
            recent: &series.recent,
            trace: &series.trace,
            trace_label: year.to_string(),
        },
        &params,
    )
}

fn legend_corner(hemisphere: Hemisphere) -> LegendCorner {
    match hemisphere {
        Hemisphere::Arctic => LegendCorner::LowerCenter,
        Hemisphere::Antarctic => LegendCorner::LowerLeft,
    }
}

fn png_response(png: Vec<u8>) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .body(png.into())
        .unwrap()
}

fn error_response(state: &AppState, err: ChartError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = if err.is_client_error() {
        state.metrics.client_errors.fetch_add(1, Ordering::Relaxed);
        err.to_string()
    } else {
        state.metrics.server_errors.fetch_add(1, Ordering::Relaxed);
        error!(error = %err, "chart request failed");
        "Internal server error".to_string()
    };
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(body.into())
        .unwrap()
}
