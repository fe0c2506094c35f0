/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::DbErr;
use web::endpoints::{get_health, handle_404};
use web::error::WebError;

#[tokio::test]
async fn health_reports_alive() {
    let response = get_health().await.unwrap();
    assert_eq!(response.message, "200 ALIVE");
}

#[tokio::test]
async fn fallback_is_not_found() {
    let err = handle_404().await;
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[test]
fn database_errors_surface_as_internal_server_error() {
    let err = WebError::from(DbErr::Custom("connection lost".to_string()));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn not_found_helpers_carry_their_messages() {
    assert_eq!(
        WebError::no_employees().to_string(),
        "Not Found: No employees found"
    );
    assert_eq!(
        WebError::no_employees_by_department().to_string(),
        "Not Found: No employee found by this department ID"
    );
    assert_eq!(
        WebError::no_employees_by_role().to_string(),
        "Not Found: No employee found by this role ID"
    );
}
