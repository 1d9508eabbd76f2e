//! Draws the baseline, recent-average, and single-year temperature series
//! as one chart and encodes it to PNG in memory.

use std::io::Cursor;

use image::{ImageOutputFormat, RgbImage};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::{FontDesc, FontFamily, FontStyle};

use polar_common::{ChartError, ChartResult};

/// Output raster width in pixels.
pub const WIDTH: u32 = 800;

/// Output raster height in pixels.
pub const HEIGHT: u32 = 500;

/// Day-of-year axis span.
const DAY_MAX: f64 = 365.0;

/// Month boundaries in day-of-year coordinates; both tick and gridline
/// positions.
const MONTH_BOUNDARIES: [f64; 13] = [
    0.0, 31.0, 59.0, 90.0, 120.0, 151.0, 181.0, 212.0, 243.0, 273.0, 304.0, 334.0, 365.0,
];

/// Label anchors centered within each month.
const MONTH_LABEL_DAYS: [f64; 12] = [
    15.5, 45.0, 74.4, 105.0, 135.5, 166.0, 196.5, 227.5, 258.0, 288.5, 319.0, 349.5,
];

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Where the series legend is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    LowerCenter,
    LowerLeft,
}

/// Presentation parameters for one rendered chart.
#[derive(Debug, Clone)]
pub struct ChartParams {
    pub title: String,
    pub y_min: f64,
    pub y_max: f64,
    pub legend: LegendCorner,
}

/// The three series drawn on a chart, each indexed by day of year.
#[derive(Debug, Clone)]
pub struct ChartSeries<'a> {
    pub baseline: &'a [f64],
    pub recent: &'a [f64],
    pub trace: &'a [f64],
    /// Legend entry for the single-year trace, usually the year digits.
    pub trace_label: String,
}

/// Render the chart and return it as PNG bytes.
pub fn render_png(series: &ChartSeries<'_>, params: &ChartParams) -> ChartResult<Vec<u8>> {
    let mut raster = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    draw(&mut raster, series, params)?;

    let rgb = RgbImage::from_raw(WIDTH, HEIGHT, raster)
        .ok_or_else(|| ChartError::Render("raster buffer size mismatch".into()))?;
    let mut png = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
        .map_err(|err| ChartError::Render(err.to_string()))?;
    Ok(png)
}

fn draw(raster: &mut [u8], series: &ChartSeries<'_>, params: &ChartParams) -> ChartResult<()> {
    let root = BitMapBackend::with_buffer(raster, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .caption(
            &params.title,
            FontDesc::new(FontFamily::SansSerif, 18.0, FontStyle::Normal),
        )
        .set_label_area_size(LabelAreaPosition::Left, 55)
        .set_label_area_size(LabelAreaPosition::Bottom, 35)
        .build_cartesian_2d(0.0..DAY_MAX, params.y_min..params.y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("Temperature (°C)")
        .y_label_formatter(&|v| format!("{v:.0}"))
        .axis_desc_style(FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal))
        .label_style(FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal))
        .draw()
        .map_err(render_error)?;

    // Vertical gridlines at month boundaries; the mesh only covers y.
    for &day in MONTH_BOUNDARIES.iter() {
        chart
            .draw_series(LineSeries::new(
                [(day, params.y_min), (day, params.y_max)],
                BLACK.mix(0.15),
            ))
            .map_err(render_error)?;
    }

    // Legend anchors are registered on empty series so every entry shows
    // even when a series has no finite points.
    chart
        .draw_series(LineSeries::new(std::iter::empty::<(f64, f64)>(), BLACK))
        .map_err(render_error)?
        .label("1980-2009 avg")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
    for run in finite_runs(series.baseline) {
        chart
            .draw_series(DashedLineSeries::new(run, 6, 4, ShapeStyle::from(&BLACK)))
            .map_err(render_error)?;
    }

    chart
        .draw_series(LineSeries::new(std::iter::empty::<(f64, f64)>(), BLACK))
        .map_err(render_error)?
        .label("2010-2023 avg")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
    for run in finite_runs(series.recent) {
        chart
            .draw_series(LineSeries::new(run, BLACK))
            .map_err(render_error)?;
    }

    chart
        .draw_series(LineSeries::new(std::iter::empty::<(f64, f64)>(), RED))
        .map_err(render_error)?
        .label(series.trace_label.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    for run in finite_runs(series.trace) {
        chart
            .draw_series(LineSeries::new(run, RED.stroke_width(2)))
            .map_err(render_error)?;
    }

    chart
        .configure_series_labels()
        .position(match params.legend {
            LegendCorner::LowerCenter => SeriesLabelPosition::LowerMiddle,
            LegendCorner::LowerLeft => SeriesLabelPosition::LowerLeft,
        })
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(FontDesc::new(FontFamily::SansSerif, 13.0, FontStyle::Normal))
        .draw()
        .map_err(render_error)?;

    // Month names sit in the bottom label area, centered within each month.
    let month_font = FontDesc::new(FontFamily::SansSerif, 13.0, FontStyle::Normal);
    for (&day, label) in MONTH_LABEL_DAYS.iter().zip(MONTH_LABELS) {
        let (x, y) = chart.backend_coord(&(day, params.y_min));
        root.draw(&Text::new(label, (x - 10, y + 8), month_font.clone()))
            .map_err(render_error)?;
    }

    root.present().map_err(render_error)?;
    Ok(())
}

/// Split a day-indexed series into runs of finite points so missing data
/// renders as gaps instead of bridged lines. Day-of-year is 1-based.
fn finite_runs(values: &[f64]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (day, &value) in values.iter().enumerate() {
        if value.is_finite() {
            current.push(((day + 1) as f64, value));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn render_error<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}
