use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{
    db::SqliteStore,
    error::ErrorResponse,
    handlers::AppState,
    screen::{CapturePrintTarget, MaintenanceScreen, Notification, NotificationLevel, Summary},
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    #[serde(flatten)]
    pub summary: Summary,
    pub total: usize,
    pub filtered: usize,
}

fn notification_response(status: StatusCode, notification: Notification) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: notification.message,
        }),
    )
        .into_response()
}

/// Load a fresh screen with the search applied
async fn load_screen(state: &AppState, query: String) -> Result<MaintenanceScreen<SqliteStore>, Response> {
    let mut screen = MaintenanceScreen::new(state.store.clone()).with_print_delay(Duration::ZERO);
    screen.load_maintenance_records().await;

    if let Some(failure) = screen.take_notifications().into_iter().find(|n| n.is_error()) {
        return Err(notification_response(StatusCode::BAD_GATEWAY, failure));
    }

    screen.set_search_query(query);
    Ok(screen)
}

/// Summary counters handler
pub async fn maintenance_summary(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let screen = match load_screen(&state, params.q).await {
        Ok(screen) => screen,
        Err(response) => return response,
    };

    let body = SummaryResponse {
        summary: screen.summary(),
        total: screen.records().len(),
        filtered: screen.filtered_records().len(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Printable report handler
pub async fn maintenance_report(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let mut screen = match load_screen(&state, params.q).await {
        Ok(screen) => screen,
        Err(response) => return response,
    };

    let target = CapturePrintTarget::new();
    screen.print_maintenance(&target).await;

    match target.take_last() {
        Some(document) => Html(document.html).into_response(),
        None => {
            let notification = screen
                .take_notifications()
                .into_iter()
                .find(|n| n.level != NotificationLevel::Success)
                .unwrap_or_else(|| Notification::warning(crate::screen::messages::PRINT_EMPTY));
            notification_response(StatusCode::NOT_FOUND, notification)
        }
    }
}
