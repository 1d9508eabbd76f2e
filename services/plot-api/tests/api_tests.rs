//! End-to-end tests for the plot API router against fixture datasets.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use plot_api::router;
use plot_api::state::AppState;

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

// ============================================================================
// Fixture helpers
// ============================================================================

/// Regional CSV with `columns` fields per row and enough day-rows for every
/// year row of the matrix to hold data.
fn write_regional_csv(path: &Path, columns: usize) {
    let mut out = String::new();
    out.push_str(
        &(0..columns)
            .map(|c| format!("h{c}"))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push('\n');
    for day in 0..(45 * 365) {
        let fields: Vec<String> = (0..columns)
            .map(|c| format!("{}", (day % 365) as f64 / 100.0 + c as f64))
            .collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    fs::write(path, out).unwrap();
}

/// Wide-format CSV: year label plus 365 day values per row.
fn write_arctic_ocean_csv(path: &Path, years: usize) {
    let mut out = String::from("header\n");
    for year in 0..years {
        let days: Vec<String> = (0..365).map(|d| format!("{}", d as f64 / 50.0)).collect();
        out.push_str(&format!("{},{}\n", 1979 + year, days.join(",")));
    }
    fs::write(path, out).unwrap();
}

/// Build an app over a tempdir seeded with all six dataset files.
fn fixture_app() -> (tempfile::TempDir, axum::Router) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_regional_csv(&root.join("ncep-surface-regional.csv"), 16);
    write_regional_csv(&root.join("ncep-925mb-regional.csv"), 16);
    write_regional_csv(&root.join("ncep-south-surface-regional.csv"), 8);
    write_regional_csv(&root.join("ncep-south-925mb-regional.csv"), 8);
    write_arctic_ocean_csv(
        &root.join("ncep-arctic-ocean-surface-temperature-1979-to-2023.csv"),
        45,
    );
    write_arctic_ocean_csv(
        &root.join("ncep-arctic-ocean-temperature-925-mb-1979-to-2023.csv"),
        45,
    );

    let app = router(Arc::new(AppState::new(root)));
    (dir, app)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

// ============================================================================
// Chart endpoint tests
// ============================================================================

#[tokio::test]
async fn test_surface_chart_for_regional_region() {
    let (_dir, app) = fixture_app();
    let (status, content_type, body) =
        get(app, "/plot-surface-temperature?year=2000&region=beaufort").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert_eq!(&body[..8], &PNG_SIGNATURE);
}

#[tokio::test]
async fn test_925mb_chart_for_antarctic_region() {
    let (_dir, app) = fixture_app();
    let (status, content_type, body) =
        get(app, "/plot-925mb-temperature?year=1979&region=ross").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/png"));
    assert_eq!(&body[..8], &PNG_SIGNATURE);
}

#[tokio::test]
async fn test_chart_for_arctic_ocean_wide_region() {
    let (_dir, app) = fixture_app();
    let (status, _, body) = get(app, "/plot-surface-temperature?year=2023&region=slater").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..8], &PNG_SIGNATURE);
}

// ============================================================================
// Validation tests
// ============================================================================

#[tokio::test]
async fn test_unknown_region_is_rejected() {
    let (_dir, app) = fixture_app();
    let (status, _, body) = get(app, "/plot-surface-temperature?year=2000&region=mars").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Unknown region name");
}

#[tokio::test]
async fn test_non_digit_year_is_rejected() {
    let (_dir, app) = fixture_app();
    let (status, _, body) = get(app, "/plot-surface-temperature?year=20o0&region=beaufort").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Invalid year");
}

#[tokio::test]
async fn test_missing_year_is_rejected() {
    let (_dir, app) = fixture_app();
    let (status, _, body) = get(app, "/plot-925mb-temperature?region=beaufort").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Invalid year");
}

#[tokio::test]
async fn test_out_of_range_year_is_rejected() {
    let (_dir, app) = fixture_app();
    let (status, _, body) = get(app, "/plot-surface-temperature?year=2025&region=beaufort").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "Year must be between 1979 and 2024"
    );
}

#[tokio::test]
async fn test_validation_runs_before_file_io() {
    // No datasets on disk at all; invalid input must still get a 400.
    let dir = tempfile::tempdir().unwrap();
    let app = router(Arc::new(AppState::new(dir.path())));
    let (status, _, body) = get(app, "/plot-surface-temperature?year=abc&region=mars").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Invalid year");
}

// ============================================================================
// Server-side failure tests
// ============================================================================

#[tokio::test]
async fn test_missing_dataset_is_a_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let app = router(Arc::new(AppState::new(dir.path())));
    let (status, _, _) = get(app, "/plot-surface-temperature?year=2000&region=beaufort").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_year_2024_beyond_dataset_rows() {
    // 2024 passes validation but the matrix only spans 1979..=2023.
    let (_dir, app) = fixture_app();
    let (status, _, _) = get(app, "/plot-surface-temperature?year=2024&region=beaufort").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// Ancillary endpoint tests
// ============================================================================

#[tokio::test]
async fn test_landing_page() {
    let (_dir, app) = fixture_app();
    let (status, _, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "Generate an air temperature graph for a given region and year"
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_dir, app) = fixture_app();
    let (status, _, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_metrics_endpoint_counts_renders() {
    let (_dir, app) = fixture_app();

    let (status, _, _) = get(
        app.clone(),
        "/plot-surface-temperature?year=2000&region=kara",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, body) = get(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("charts_rendered_total 1"));
    assert!(text.contains("client_errors_total 0"));
}
