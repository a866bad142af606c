pub mod events;
pub mod export;
pub mod months;
pub mod signups;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use careboard_core::CareboardError;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert errors to HTTP responses with the status the error class calls
/// for: input and domain-state errors are 400s, missing identity is 401,
/// unknown events are 404, store failures are 500s.
pub enum AppError {
    Domain(CareboardError),
    Unauthenticated,
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Domain(err) => match err {
                CareboardError::InvalidMonthSlug(_)
                | CareboardError::UnknownRole(_)
                | CareboardError::AlreadyJoined(_)
                | CareboardError::NotJoined(_)
                | CareboardError::EventFull(_) => StatusCode::BAD_REQUEST,
                CareboardError::EventNotFound(_) => StatusCode::NOT_FOUND,
                CareboardError::Config(_)
                | CareboardError::Store(_)
                | CareboardError::Io(_)
                | CareboardError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Unauthenticated => "not authenticated".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Domain(err) => err.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.message(), "request failed");
        }

        let body = Json(ErrorResponse {
            error: self.message(),
        });
        (status, body).into_response()
    }
}

impl From<CareboardError> for AppError {
    fn from(err: CareboardError) -> Self {
        AppError::Domain(err)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use careboard_core::Event;
    use chrono::{TimeZone, Utc};

    use crate::app;
    use crate::state::AppState;

    fn seeded_app() -> (TempDir, axum::Router) {
        let dir = TempDir::new().unwrap();
        let events = vec![
            Event {
                id: 3,
                name: "Bingo".to_string(),
                category: Some("Social".to_string()),
                start: Utc.with_ymd_and_hms(2026, 2, 7, 10, 0, 0).unwrap(),
                duration_minutes: 60,
                target_headcount: 2,
            },
            Event {
                id: 5,
                name: "Grocery run".to_string(),
                category: Some("Transport".to_string()),
                start: Utc.with_ymd_and_hms(2026, 2, 14, 9, 0, 0).unwrap(),
                duration_minutes: 120,
                target_headcount: 0,
            },
        ];
        let content = serde_json::to_string_pretty(&events).unwrap();
        std::fs::write(dir.path().join("events.json"), content).unwrap();

        let app = app(AppState::with_data_dir(dir.path()));
        (dir, app)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn signup_request(method: &str, event_id: i64, participant: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri("/months/2026-02/signups")
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(id) = participant {
            builder = builder
                .header("x-participant-id", id)
                .header("x-participant-role", "volunteer");
        }

        builder
            .body(Body::from(format!("{{\"event_id\":{event_id}}}")))
            .unwrap()
    }

    #[tokio::test]
    async fn test_months_lists_event_months() {
        let (_dir, app) = seeded_app();

        let response = app.oneshot(get("/months")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json[0]["slug"], "2026-02");
        assert_eq!(json[0]["label"], "Feb 2026");
    }

    #[tokio::test]
    async fn test_invalid_month_slug_is_rejected() {
        let (_dir, app) = seeded_app();

        let response = app.oneshot(get("/months/2026-13/events")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("2026-13"));
    }

    #[tokio::test]
    async fn test_events_include_coverage() {
        let (_dir, app) = seeded_app();

        let response = app.oneshot(get("/months/2026-02/events")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json[0]["id"], 3);
        assert_eq!(json[0]["coverage"]["status"], "open");
        assert_eq!(json[1]["coverage"]["status"], "unspecified");
    }

    #[tokio::test]
    async fn test_category_filter_narrows_events() {
        let (_dir, app) = seeded_app();

        let response = app
            .oneshot(get("/months/2026-02/events?category=Transport"))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"], 5);
    }

    #[tokio::test]
    async fn test_event_detail_includes_end_time() {
        let (_dir, app) = seeded_app();

        let response = app.oneshot(get("/months/2026-02/events/5")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["end"], "2026-02-14T11:00:00Z");
    }

    #[tokio::test]
    async fn test_unknown_event_detail_is_404() {
        let (_dir, app) = seeded_app();

        let response = app.oneshot(get("/months/2026-02/events/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_calendar_grid_is_week_aligned() {
        let (_dir, app) = seeded_app();

        let response = app.oneshot(get("/months/2026-02/calendar")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let cells = json["cells"].as_array().unwrap();
        assert_eq!(cells.len() % 7, 0);
        // 2026-02 starts on a Sunday with 28 days: no padding at all
        assert_eq!(cells.len(), 28);
        assert_eq!(cells[6]["date"], "2026-02-07");
        assert_eq!(cells[6]["events"][0]["name"], "Bingo");
        assert_eq!(cells[6]["events"][0]["full"], false);
    }

    #[tokio::test]
    async fn test_signup_requires_identity() {
        let (_dir, app) = seeded_app();

        let response = app
            .oneshot(signup_request("POST", 3, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = body_json(response).await;
        assert_eq!(json["error"], "not authenticated");
    }

    #[tokio::test]
    async fn test_signup_join_then_duplicate() {
        let (_dir, app) = seeded_app();

        let response = app
            .clone()
            .oneshot(signup_request("POST", 3, Some("u1")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "joined");

        let response = app
            .oneshot(signup_request("POST", 3, Some("u1")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Already signed up"));
    }

    #[tokio::test]
    async fn test_withdraw_without_signup_is_rejected() {
        let (_dir, app) = seeded_app();

        let response = app
            .oneshot(signup_request("DELETE", 3, Some("u1")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Not signed up"));
    }

    #[tokio::test]
    async fn test_signup_for_unknown_event_is_404() {
        let (_dir, app) = seeded_app();

        let response = app
            .oneshot(signup_request("POST", 99, Some("u1")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_export_produces_csv_attachment() {
        let (_dir, app) = seeded_app();

        // Cover event 3 so the export shows both status values
        for participant in ["u1", "u2"] {
            let response = app
                .clone()
                .oneshot(signup_request("POST", 3, Some(participant)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(get("/months/2026-02/export")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(
            headers.get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            headers.get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"events_2026-02.csv\""
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let csv = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(
            csv,
            "event_id,name,date_time,needed,signed_up,status\n\
             3,Bingo,2026-02-07T10:00:00Z,2,2,Enough\n\
             5,Grocery run,2026-02-14T09:00:00Z,0,0,Not enough"
        );
    }

    #[tokio::test]
    async fn test_export_rejects_bad_slug_before_store_access() {
        let (_dir, app) = seeded_app();

        let response = app.oneshot(get("/months/never/export")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
