use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower::ServiceBuilder;
use axum::extract::DefaultBodyLimit;

use super::handlers::*;
use super::AppState;
use crate::config::TrackerConfig;

pub fn create_router(config: TrackerConfig) -> Router {
    let state = Arc::new(AppState::new(config, reqwest::Client::new()));

    Router::new()
        .route("/api/distance", get(get_distance))
        .route("/api/bearing", get(get_bearing))
        .route("/api/iss", get(get_iss))
        .route("/api/upload", post(upload_csv))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(16 * 1024 * 1024)) // 16MB limit
                .layer(CorsLayer::permissive())
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_distance_endpoint() {
        let app = create_router(TrackerConfig::default());
        let (status, body) = send(
            app,
            get_request("/api/distance?from_lat=0&from_lon=0&to_lat=0&to_lon=90"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!((json["kilometers"].as_f64().unwrap() - 10007.5).abs() < 0.1);
    }

    #[tokio::test]
    async fn test_distance_rejects_out_of_range() {
        let app = create_router(TrackerConfig::default());
        let (status, body) = send(
            app,
            get_request("/api/distance?from_lat=91&from_lon=0&to_lat=0&to_lon=0"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid coordinate"));
    }

    #[tokio::test]
    async fn test_bearing_endpoint_with_origin() {
        let app = create_router(TrackerConfig::default());
        let (status, body) = send(
            app,
            get_request("/api/bearing?lat=0&lon=1&origin_lat=0&origin_lon=0"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["compass"], "E");
        assert_eq!(json["degrees"], 90);
    }

    #[tokio::test]
    async fn test_bearing_defaults_to_observer() {
        let observer = crate::geodesy::Coordinate::new(10.0, 10.0);
        let app = create_router(TrackerConfig::default().with_observer(observer));
        let (status, body) = send(app, get_request("/api/bearing?lat=20&lon=10&rose=8")).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["compass"], "N");
    }

    #[tokio::test]
    async fn test_bearing_rejects_bad_rose() {
        let app = create_router(TrackerConfig::default());
        let (status, _) = send(app, get_request("/api/bearing?lat=1&lon=1&rose=12")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_bearing_rejects_half_origin() {
        let app = create_router(TrackerConfig::default());
        let (status, body) = send(app, get_request("/api/bearing?lat=1&lon=1&origin_lat=0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("together"));
    }

    #[tokio::test]
    async fn test_iss_upstream_failure_is_bad_gateway() {
        let mut config = TrackerConfig::default();
        config.iss_now_url = "http://127.0.0.1:9/iss-now.json".to_string();

        let app = create_router(config);
        let (status, body) = send(app, get_request("/api/iss")).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("Failed to build report"));
    }

    #[tokio::test]
    async fn test_upload_csv() {
        let app = create_router(TrackerConfig::default().with_observer(crate::geodesy::Coordinate::new(0.0, 0.0)));
        let body = "--BOUNDARY\r\n\
            Content-Disposition: form-data; name=\"csv\"; filename=\"points.csv\"\r\n\
            Content-Type: text/csv\r\n\r\n\
            latitude,longitude\n0,90\nnope,1\n\r\n\
            --BOUNDARY--\r\n";

        let request = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=BOUNDARY")
            .body(Body::from(body))
            .unwrap();

        let (status, csv) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(csv.contains("# Successful: 1\n"));
        assert!(csv.contains("# Failed: 1\n"));
        assert!(csv.contains("0,90,6217.212,10007.543,E,90\n"));
    }

    #[tokio::test]
    async fn test_upload_without_csv_field() {
        let app = create_router(TrackerConfig::default());
        let body = "--BOUNDARY\r\n\
            Content-Disposition: form-data; name=\"other\"\r\n\r\n\
            value\r\n\
            --BOUNDARY--\r\n";

        let request = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=BOUNDARY")
            .body(Body::from(body))
            .unwrap();

        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Missing CSV file"));
    }
}
