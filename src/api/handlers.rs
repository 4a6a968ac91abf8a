use axum::{
    body::Body,
    extract::{Multipart, Query, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::io::Cursor;
use std::sync::Arc;

use super::models::*;
use super::AppState;
use crate::batch::process_csv_reader;
use crate::geodesy::{bearing_with, distance, BearingResult, CompassRose, Coordinate, DistanceResult};
use crate::report::Report;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse { error: error.into() }))
}

fn validated(coord: Coordinate) -> Result<Coordinate, ApiError> {
    if coord.is_valid() {
        Ok(coord)
    } else {
        Err(api_error(
            StatusCode::BAD_REQUEST,
            Error::InvalidCoordinate(coord).to_string(),
        ))
    }
}

pub async fn get_distance(
    Query(req): Query<DistanceRequest>,
) -> Result<Json<DistanceResult>, ApiError> {
    let from = validated(Coordinate::new(req.from_lat, req.from_lon))?;
    let to = validated(Coordinate::new(req.to_lat, req.to_lon))?;

    Ok(Json(distance(from, to)))
}

pub async fn get_bearing(
    State(state): State<Arc<AppState>>,
    Query(req): Query<BearingRequest>,
) -> Result<Json<BearingResult>, ApiError> {
    let rose = CompassRose::from_points(req.rose).ok_or_else(|| {
        api_error(
            StatusCode::BAD_REQUEST,
            format!("rose must be 8 or 16, got {}", req.rose),
        )
    })?;

    let origin = match (req.origin_lat, req.origin_lon) {
        (Some(lat), Some(lon)) => validated(Coordinate::new(lat, lon))?,
        (None, None) => state.config.observer,
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "origin_lat and origin_lon must be given together",
            ))
        }
    };
    let destination = validated(Coordinate::new(req.lat, req.lon))?;

    Ok(Json(bearing_with(destination, origin, rose)))
}

pub async fn get_iss(State(state): State<Arc<AppState>>) -> Result<Json<Report>, ApiError> {
    match state.tracker.report().await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            log::warn!("ISS report failed: {}", e);
            Err(api_error(
                StatusCode::BAD_GATEWAY,
                format!("Failed to build report: {}", e),
            ))
        }
    }
}

pub async fn upload_csv(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut csv_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("csv") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Failed to read csv: {}", e)))?;
            csv_data = Some(bytes.to_vec());
        }
    }

    let csv_data =
        csv_data.ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Missing CSV file"))?;

    let observer = state.config.observer;
    let rendered = tokio::task::spawn_blocking(move || {
        process_csv_reader(Cursor::new(csv_data), observer)?.to_csv()
    })
    .await
    .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
    .map_err(|e| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to process CSV: {}", e),
        )
    })?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.as_ref())
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"iss_tracker_results.csv\"",
        )
        .body(Body::from(rendered))
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
