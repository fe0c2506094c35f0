/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod employees;
pub mod seed;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use core::types::MessageResponse;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<MessageResponse>> {
    let res = MessageResponse {
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}
