/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::Json;
use axum::extract::State;
use core::seed::{reset_schema, seed_demo_data};
use core::types::{MessageResponse, ServerState};
use std::sync::Arc;

/// Wipes the schema and repopulates it with the fixed demo dataset.
pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<MessageResponse>> {
    reset_schema(&state.db).await?;
    seed_demo_data(&state.db).await?;

    let res = MessageResponse {
        message: "Database seeded!".to_string(),
    };

    Ok(Json(res))
}
