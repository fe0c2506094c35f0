/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use core::types::{ErrorResponse, MessageResponse};
use sea_orm::DbErr;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    NotFound(String),
    Database(DbErr),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            // Not-found carries a human message, mirroring the list endpoints'
            // empty-result contract.
            WebError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse { message: msg })).into_response()
            }
            WebError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: msg })).into_response()
            }
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            WebError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn no_employees() -> Self {
        WebError::NotFound("No employees found".to_string())
    }

    pub fn no_employees_by_department() -> Self {
        WebError::NotFound("No employee found by this department ID".to_string())
    }

    pub fn no_employees_by_role() -> Self {
        WebError::NotFound("No employee found by this role ID".to_string())
    }

    pub fn invalid_order() -> Self {
        WebError::BadRequest("Invalid order, expected ASC or DESC".to_string())
    }
}
